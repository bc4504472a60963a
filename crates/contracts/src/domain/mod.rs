pub mod common;

pub mod a001_customer;
pub mod a002_quote;
pub mod a003_employee;
pub mod a004_support_ticket;
pub mod a005_shipment;
pub mod a006_invoice;
