//! Dashboard view models
//!
//! Flat, null-safe projections of ERP records. Every field typed as
//! `String`/`f64`/`i64` is guaranteed populated by the mappers in
//! `kivu-core`; optional presentation-only data (images, descriptions)
//! stays `Option`.

pub mod audit;
pub mod calendar;
pub mod company;
pub mod inventory;
pub mod invoice;
pub mod messaging;
pub mod partner;
pub mod recovery;
pub mod report;
pub mod site;
pub mod ticket;

pub use audit::AuditLog;
pub use calendar::{CalendarEvent, EventInput};
pub use company::Company;
pub use inventory::{Inventory, InventoryKind, InventoryState};
pub use invoice::{Invoice, InvoiceStatus, PaymentState};
pub use messaging::{Channel, ChatMessage};
pub use partner::{Partner, Province};
pub use recovery::{OverdueLevel, RecoveryItem};
pub use report::{MonthlyRevenue, ReportData, SiteRevenue, ZoneOccupancy};
pub use site::{Site, SiteInput};
pub use ticket::{Ticket, TicketPriority, TicketStage};
