use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_add_minimal() {
    match parse(&["autocart", "add", "1", "Civic EXL", "115000"]).command {
        CliCommand::Add(v) => {
            assert_eq!(v.id, 1);
            assert_eq!(v.name, "Civic EXL");
            assert_eq!(v.price, 115_000.0);
            assert_eq!(v.year, 0);
            assert!(v.path.is_empty());
        }
        _ => panic!("expected Add"),
    }
}

#[test]
fn cli_parse_add_with_details() {
    match parse(&[
        "autocart",
        "add",
        "7",
        "Corolla",
        "70000.50",
        "--path",
        "/img/corolla.png",
        "--year",
        "2021",
        "--color",
        "Prata",
        "--mileage",
        "32000",
    ])
    .command
    {
        CliCommand::Add(v) => {
            let item: autocart_core::cart::CartLineItem = v.into();
            assert_eq!(item.id, 7);
            assert_eq!(item.price, 70_000.5);
            assert_eq!(item.path, "/img/corolla.png");
            assert_eq!(item.year, 2021);
            assert_eq!(item.color, "Prata");
            assert_eq!(item.mileage, 32_000);
            assert_eq!(item.quantity, 1);
        }
        _ => panic!("expected Add"),
    }
}

#[test]
fn cli_parse_add_rejects_non_finite_price() {
    for price in ["NaN", "inf", "-inf", "abc"] {
        assert!(
            Cli::try_parse_from(["autocart", "add", "1", "Gol", price]).is_err(),
            "accepted price {price}"
        );
    }
}

#[test]
fn cli_parse_remove() {
    match parse(&["autocart", "remove", "99"]).command {
        CliCommand::Remove { id } => assert_eq!(id, 99),
        _ => panic!("expected Remove"),
    }
}

#[test]
fn cli_parse_quantity_allows_negative() {
    match parse(&["autocart", "quantity", "3", "-1"]).command {
        CliCommand::Quantity { id, quantity } => {
            assert_eq!(id, 3);
            assert_eq!(quantity, -1);
        }
        _ => panic!("expected Quantity"),
    }
}

#[test]
fn cli_parse_clear_and_show() {
    assert!(matches!(parse(&["autocart", "clear"]).command, CliCommand::Clear));
    assert!(matches!(parse(&["autocart", "show"]).command, CliCommand::Show));
}

#[test]
fn cli_parse_global_key() {
    let cli = parse(&["autocart", "show", "--key", "carrinho"]);
    assert_eq!(cli.key.as_deref(), Some("carrinho"));
    let cli = parse(&["autocart", "--key", "outro", "clear"]);
    assert_eq!(cli.key.as_deref(), Some("outro"));
    assert!(parse(&["autocart", "show"]).key.is_none());
}

#[test]
fn cli_parse_checkout() {
    match parse(&[
        "autocart",
        "checkout",
        "--card-number",
        "4111111111111111",
        "--card-holder",
        "Maria Silva",
        "--expiry",
        "12/29",
        "--cvv",
        "123",
    ])
    .command
    {
        CliCommand::Checkout {
            card_number,
            card_holder,
            expiry,
            cvv,
        } => {
            assert_eq!(card_number, "4111111111111111");
            assert_eq!(card_holder, "Maria Silva");
            assert_eq!(expiry, "12/29");
            assert_eq!(cvv, "123");
        }
        _ => panic!("expected Checkout"),
    }
}

#[test]
fn cli_parse_checkout_requires_card_fields() {
    assert!(Cli::try_parse_from(["autocart", "checkout", "--cvv", "123"]).is_err());
}

#[tokio::test]
async fn checkout_on_empty_cart_reports_empty_before_blank_fields() {
    use autocart_core::checkout::{CheckoutError, PaymentDetails};
    use autocart_core::storage::MemoryStore;

    let mut store = autocart_core::cart::CartStore::open(MemoryStore::new(), "cart");
    let err = run_checkout(
        &mut store,
        &PaymentDetails::default(),
        std::time::Duration::ZERO,
    )
    .await
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CheckoutError>(),
        Some(CheckoutError::EmptyCart)
    ));
}

#[test]
fn commands_drive_a_file_backed_cart() {
    use autocart_core::config::CartConfig;

    let dir = tempfile::tempdir().unwrap();
    let cfg = CartConfig {
        state_dir: Some(dir.path().to_path_buf()),
        ..CartConfig::default()
    };

    let mut store = commands::open_store(&cfg, "cart").unwrap();
    for args in [
        ["autocart", "add", "1", "Gol", "50000"],
        ["autocart", "add", "2", "Corolla", "70000"],
    ] {
        if let CliCommand::Add(v) = parse(&args).command {
            run_add(&mut store, v).unwrap();
        }
    }
    run_quantity(&mut store, 2, 0).unwrap();
    run_show(&store);

    let reopened = commands::open_store(&cfg, "cart").unwrap();
    assert_eq!(reopened.item_count(), 1);
    assert_eq!(reopened.total(), 50_000.0);

    let mut reopened = reopened;
    run_remove(&mut reopened, 1).unwrap();
    run_clear(&mut reopened).unwrap();
    assert!(reopened.items().is_empty());
}
