use super::*;

// ============================================================================
// format_price
// ============================================================================

#[test]
fn format_price_keeps_fractional_part() {
    assert_eq!(format_price(3.5), "3.5");
    assert_eq!(format_price(1.99), "1.99");
}

#[test]
fn format_price_drops_fraction_for_whole_numbers() {
    assert_eq!(format_price(4.0), "4");
    assert_eq!(format_price(10.0), "10");
}

// ============================================================================
// product_rows
// ============================================================================

#[test]
fn product_rows_preserves_received_order() {
    let products = vec![
        Product {
            name: "Latte".to_owned(),
            price: 3.5,
            sku: "CFE02".to_owned(),
        },
        Product {
            name: "Mocha".to_owned(),
            price: 4.0,
            sku: "CFE03".to_owned(),
        },
    ];

    let rows = product_rows(&products);

    assert_eq!(
        rows,
        vec![
            (
                "Latte".to_owned(),
                "3.5".to_owned(),
                "CFE02".to_owned()
            ),
            (
                "Mocha".to_owned(),
                "4".to_owned(),
                "CFE03".to_owned()
            ),
        ]
    );
}

#[test]
fn product_rows_is_empty_for_empty_catalog() {
    assert!(product_rows(&[]).is_empty());
}

#[test]
fn product_rows_is_idempotent_over_unchanged_input() {
    let products = vec![Product {
        name: "Flat White".to_owned(),
        price: 3.25,
        sku: "CFE05".to_owned(),
    }];

    assert_eq!(product_rows(&products), product_rows(&products));
}
