use super::*;

#[test]
fn catalog_state_default_is_empty_and_idle() {
    let state = CatalogState::default();
    assert!(state.products.is_empty());
    assert!(!state.loading);
}

#[test]
fn catalog_state_holds_products_in_given_order() {
    let state = CatalogState {
        products: vec![
            Product { name: "Latte".to_owned(), price: 3.5, sku: "L1".to_owned() },
            Product { name: "Mocha".to_owned(), price: 4.0, sku: "M1".to_owned() },
        ],
        loading: false,
    };
    assert_eq!(state.products[0].sku, "L1");
    assert_eq!(state.products[1].sku, "M1");
}
