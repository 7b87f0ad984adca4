use core::str::FromStr;

use serde::{Deserialize, Serialize};

use varahi_core::{DomainError, ValueObject};

use crate::field_store::{FormField, FormSchema};

/// Inputs of the product order form.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderField {
    Name,
    Address,
    Phone,
    Microns,
    Quantity,
}

impl OrderField {
    pub const ALL: [OrderField; 5] = [
        OrderField::Name,
        OrderField::Address,
        OrderField::Phone,
        OrderField::Microns,
        OrderField::Quantity,
    ];
}

impl FormField for OrderField {
    fn name(self) -> &'static str {
        match self {
            OrderField::Name => "name",
            OrderField::Address => "address",
            OrderField::Phone => "phone",
            OrderField::Microns => "microns",
            OrderField::Quantity => "quantity",
        }
    }
}

impl FromStr for OrderField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderField::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| DomainError::unknown_field(s))
    }
}

/// Snapshot of the order form.
///
/// `microns` is free text (e.g. "30-120 for films"). `quantity` holds the raw
/// text of the number input; see [`OrderSnapshot::quantity`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderSnapshot {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub microns: String,
    pub quantity: String,
}

impl ValueObject for OrderSnapshot {}

impl OrderSnapshot {
    /// Requested thickness, if the customer gave one.
    pub fn microns(&self) -> Option<&str> {
        if self.microns.is_empty() {
            None
        } else {
            Some(&self.microns)
        }
    }

    /// Requested quantity, if the trimmed input is a positive whole number.
    ///
    /// The digits are returned as typed (no width limit, leading zeros kept).
    /// Empty, zero, signed, fractional or non-numeric input is treated as not
    /// given.
    pub fn quantity(&self) -> Option<&str> {
        let digits = self.quantity.trim();
        let is_number = !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());
        if is_number && digits.bytes().any(|b| b != b'0') {
            Some(digits)
        } else {
            None
        }
    }
}

impl FormSchema for OrderSnapshot {
    type Field = OrderField;

    const FORM: &'static str = "order";

    fn get(&self, field: OrderField) -> &str {
        match field {
            OrderField::Name => &self.name,
            OrderField::Address => &self.address,
            OrderField::Phone => &self.phone,
            OrderField::Microns => &self.microns,
            OrderField::Quantity => &self.quantity,
        }
    }

    fn set(&mut self, field: OrderField, value: String) {
        match field {
            OrderField::Name => self.name = value,
            OrderField::Address => self.address = value,
            OrderField::Phone => self.phone = value,
            OrderField::Microns => self.microns = value,
            OrderField::Quantity => self.quantity = value,
        }
    }
}
