//! Presentation-level tests driven by scripted gateways.

mod full_page;
