//! Checkout and review flows against a durable store.

use std::time::Duration;

use atelier_cache::Cache;
use atelier_commerce::checkout::format_card_number;
use atelier_commerce::prelude::*;

fn card_form() -> CheckoutForm {
    CheckoutForm {
        email: "ada@example.com".into(),
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        address: "12 St James's Square".into(),
        city: "London".into(),
        zip: "SW1Y 4JH".into(),
        payment_method: PaymentMethod::Card,
        card_number: format_card_number("4242424242424242"),
        expiry: "12/28".into(),
        cvv: "123".into(),
        ..CheckoutForm::default()
    }
}

#[tokio::test(start_paused = true)]
async fn checkout_clears_the_stored_cart() {
    let dir = tempfile::tempdir().unwrap();
    let cache = Cache::open(dir.path()).unwrap();

    let mut cart = Cart::new();
    cart.add_item(catalog::product(&ProductId::new("7")).unwrap());
    cart.save(&cache).unwrap();

    let mut cart = Cart::load(&cache).unwrap();
    let mut flow = CheckoutFlow::new();
    assert!(!flow.needs_redirect(&cart));

    let confirmation = flow.submit(&card_form(), &mut cart).await.unwrap();
    cart.save(&cache).unwrap();

    assert_eq!(confirmation.total, Money::usd(425));
    assert_eq!(confirmation.email, "ada@example.com");
    assert!(confirmation.order_id.as_str().starts_with("ord_"));
    assert!(matches!(flow.state(), CheckoutState::Confirmed(_)));
    assert!(Cart::load(&cache).unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn only_the_selected_payment_method_is_checked() {
    let mut cart = Cart::new();
    cart.add_item(catalog::product(&ProductId::new("2")).unwrap());

    let mut form = card_form();
    form.payment_method = PaymentMethod::Wallet;
    let mut flow = CheckoutFlow::new();

    let err = flow.submit(&form, &mut cart).await.unwrap_err();
    let errors = err.field_errors().unwrap();
    assert_eq!(errors.get("wallet"), Some("Please select a wallet"));
    assert_eq!(errors.len(), 1);

    form.wallet = Some(Wallet::ApplePay);
    flow.field_edited("wallet");
    let confirmation = flow.submit(&form, &mut cart).await.unwrap();
    assert_eq!(confirmation.payment_method, PaymentMethod::Wallet);
    assert_eq!(confirmation.shipping, Money::usd(12));
}

#[tokio::test(start_paused = true)]
async fn custom_delay_and_shipping_policy() {
    let policy = ShippingPolicy {
        free_threshold: Money::usd(50),
        flat_rate: Money::usd(5),
    };
    let mut flow = CheckoutFlow::new()
        .with_processing_delay(Duration::from_millis(250))
        .with_shipping(policy);
    let mut cart = Cart::new();
    cart.add_item(catalog::product(&ProductId::new("4")).unwrap());

    let started = tokio::time::Instant::now();
    let confirmation = flow.submit(&card_form(), &mut cart).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(250));
    assert!(started.elapsed() < Duration::from_secs(2));
    assert!(confirmation.shipping.is_zero());
}

#[tokio::test]
async fn reviews_survive_a_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    {
        let cache = Cache::open(dir.path()).unwrap();
        let mut board = ReviewBoard::load(&cache).unwrap();
        board
            .submit(ReviewForm::new("Ada", 5, "The coat is superb."), &cache)
            .await
            .unwrap();
        board
            .submit(ReviewForm::new("Grace", 3, "Sleeves run long."), &cache)
            .await
            .unwrap();
    }

    let cache = Cache::open(dir.path()).unwrap();
    let board = ReviewBoard::load(&cache).unwrap();
    assert_eq!(board.len(), 2);
    assert_eq!(board.reviews()[0].name, "Grace");
    assert_eq!(board.summary().average_rating, 4.0);
}

#[test]
fn corrupt_reviews_surface_as_storage_errors() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("reviews.json"), b"{not json").unwrap();

    let cache = Cache::open(dir.path()).unwrap();
    let err = ReviewBoard::load(&cache).unwrap_err();
    assert!(matches!(err, CommerceError::Storage(_)));
}
