//! Published company contact details (contact page sidebar).

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompanyContact {
    pub name: &'static str,
    pub address: &'static str,
    /// Human-readable phone number; the dispatch destination is configured
    /// separately.
    pub phone: &'static str,
    pub email: &'static str,
}

pub const COMPANY: CompanyContact = CompanyContact {
    name: "Varahi Eco Green",
    address: "Near Prayag School, Alampur X Road, Telangana, India - 509126",
    phone: "+91 83338 76725",
    email: "earthgreenery57@gmail.com",
};
