//! Message formatter: snapshot (+ product title) to the labeled text block.
//!
//! Output layout is fixed: a header line, one blank line, then one
//! `Label: value` line per field in form order. Lines are joined with `\n` and
//! there is no trailing newline.

use crate::{ContactSnapshot, OrderSnapshot};

/// Placeholder for optional order fields left empty.
pub const NOT_SPECIFIED: &str = "Not specified";

const CONTACT_HEADER: &str = "New Contact Request";

/// Text block for a contact request.
pub fn contact_message(snapshot: &ContactSnapshot) -> String {
    render(
        CONTACT_HEADER,
        &[
            ("Name", snapshot.name.as_str()),
            ("Email", snapshot.email.as_str()),
            ("Phone", snapshot.phone.as_str()),
            ("Message", snapshot.message.as_str()),
        ],
    )
}

/// Text block for an order of `product_title`.
pub fn order_message(snapshot: &OrderSnapshot, product_title: &str) -> String {
    render(
        &format!("New Order for {product_title}"),
        &[
            ("Name", snapshot.name.as_str()),
            ("Address", snapshot.address.as_str()),
            ("Phone", snapshot.phone.as_str()),
            ("Microns", snapshot.microns().unwrap_or(NOT_SPECIFIED)),
            ("Quantity", snapshot.quantity().unwrap_or(NOT_SPECIFIED)),
        ],
    )
}

fn render(header: &str, lines: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(
        header.len() + lines.iter().map(|(l, v)| l.len() + v.len() + 3).sum::<usize>() + 1,
    );
    out.push_str(header);
    out.push('\n');
    for (label, value) in lines {
        out.push('\n');
        out.push_str(label);
        out.push_str(": ");
        out.push_str(value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asha() -> ContactSnapshot {
        ContactSnapshot {
            name: "Asha".into(),
            email: "a@x.com".into(),
            phone: "555".into(),
            message: "Hi".into(),
        }
    }

    #[test]
    fn contact_block_has_fixed_layout() {
        assert_eq!(
            contact_message(&asha()),
            "New Contact Request\n\nName: Asha\nEmail: a@x.com\nPhone: 555\nMessage: Hi"
        );
    }

    #[test]
    fn order_block_substitutes_placeholders() {
        let snap = OrderSnapshot {
            name: "Asha".into(),
            address: "Alampur".into(),
            phone: "555".into(),
            microns: String::new(),
            quantity: String::new(),
        };

        let text = order_message(&snap, "Medical Waste Bags");

        assert_eq!(
            text,
            "New Order for Medical Waste Bags\n\n\
             Name: Asha\n\
             Address: Alampur\n\
             Phone: 555\n\
             Microns: Not specified\n\
             Quantity: Not specified"
        );
    }

    #[test]
    fn order_block_renders_given_optional_fields() {
        let snap = OrderSnapshot {
            name: "Ravi".into(),
            address: "Hyderabad".into(),
            phone: "9000".into(),
            microns: "40".into(),
            quantity: "1200".into(),
        };

        let text = order_message(&snap, "Compostable Films");

        assert!(text.ends_with("Microns: 40\nQuantity: 1200"));
        assert!(!text.contains(NOT_SPECIFIED));
    }

    #[test]
    fn large_quantity_is_sent_as_typed() {
        let mut snap = OrderSnapshot {
            name: "Ravi".into(),
            address: "Hyderabad".into(),
            phone: "9000".into(),
            microns: String::new(),
            quantity: "5000000000".into(),
        };

        let text = order_message(&snap, "Grocery Bags");
        assert!(text.ends_with("Microns: Not specified\nQuantity: 5000000000"));

        snap.quantity = "007".into();
        let text = order_message(&snap, "Grocery Bags");
        assert!(text.ends_with("Quantity: 007"));
    }

    #[test]
    fn multi_line_values_are_kept_verbatim() {
        let mut snap = asha();
        snap.message = "Line one\nLine two & more".into();

        let text = contact_message(&snap);

        assert!(text.ends_with("Message: Line one\nLine two & more"));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: contact output is the header, a blank line, then the
            /// four labeled lines in order (single-line values).
            #[test]
            fn contact_lines_are_ordered(
                name in "[^\n\r]{0,40}",
                email in "[^\n\r]{0,40}",
                phone in "[0-9+ ]{0,15}",
                message in "[^\n\r]{0,80}",
            ) {
                let snap = ContactSnapshot { name, email, phone, message };
                let text = contact_message(&snap);
                let lines: Vec<&str> = text.split('\n').collect();

                prop_assert_eq!(lines.len(), 6);
                prop_assert_eq!(lines[0], "New Contact Request");
                prop_assert_eq!(lines[1], "");
                prop_assert_eq!(lines[2].to_string(), format!("Name: {}", snap.name));
                prop_assert_eq!(lines[3].to_string(), format!("Email: {}", snap.email));
                prop_assert_eq!(lines[4].to_string(), format!("Phone: {}", snap.phone));
                prop_assert_eq!(lines[5].to_string(), format!("Message: {}", snap.message));
            }

            /// Property: formatting is deterministic.
            #[test]
            fn order_format_is_deterministic(
                name in ".{0,30}",
                address in ".{0,60}",
                microns in ".{0,10}",
                quantity in "[0-9]{0,6}",
                title in "[A-Za-z ]{1,30}",
            ) {
                let snap = OrderSnapshot {
                    name,
                    address,
                    phone: "555".into(),
                    microns,
                    quantity,
                };
                prop_assert_eq!(order_message(&snap, &title), order_message(&snap.clone(), &title));
            }
        }
    }
}
