//! # Demo Session Seeder
//!
//! Writes a demo cart and wishlist for one session so the storefront has
//! something to hydrate during development.
//!
//! ## Usage
//! ```bash
//! # Seed the "default" session in ./aurum_dev.db
//! cargo run -p aurum-db --bin seed
//!
//! # Specify database path and session
//! cargo run -p aurum-db --bin seed -- --db ./data/aurum.db --session demo
//! ```
//!
//! The snapshot is produced by replaying actions through the reducers, so
//! what lands in the database is exactly what the store would hold.

use std::env;

use aurum_core::store::replay;
use aurum_core::{Action, CartAction, CartItem, Money, RootState, WishlistAction, WishlistItem};
use aurum_db::{Database, DbConfig};
use uuid::Uuid;

/// (product_id, name, price in rupees, variant)
const CATALOG: &[(&str, &str, i64, Option<&str>)] = &[
    ("ring-001", "Gold Ring", 25_000, Some("18K / Size 7")),
    ("necklace-001", "Diamond Necklace", 85_000, None),
    ("earrings-001", "Pearl Earrings", 15_000, None),
    ("bangle-001", "Kundan Bangle", 42_500, Some("2.6")),
    ("pendant-001", "Emerald Pendant", 61_999, None),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./aurum_dev.db");
    let mut session = String::from(aurum_core::DEFAULT_SESSION_ID);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--session" | "-s" => {
                if i + 1 < args.len() {
                    session = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Aurum Storefront Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>        Database file path (default: ./aurum_dev.db)");
                println!("  -s, --session <ID>     Session to seed (default: default)");
                println!("  -h, --help             Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Aurum Storefront Seed Data Generator");
    println!("====================================");
    println!("Database: {}", db_path);
    println!("Session:  {}", session);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.carts().count(&session).await? + db.wishlists().count(&session).await?;
    if existing > 0 {
        println!("⚠ Session already has {} saved rows", existing);
        println!("  Skipping seed to avoid overwriting it.");
        return Ok(());
    }

    let state = replay(RootState::default(), demo_actions());

    db.carts().replace(&session, state.cart().items()).await?;
    db.wishlists().replace(&session, state.wishlist().items()).await?;

    println!();
    println!(
        "✓ Cart: {} lines, {} items, {}",
        state.cart().line_count(),
        state.cart().total_items(),
        state.cart().total_amount()
    );
    println!("✓ Wishlist: {} entries", state.wishlist().len());
    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Adds the first three catalog products to the cart (the ring twice, so the
/// merge path runs) and wishlists the rest.
fn demo_actions() -> Vec<Action> {
    let mut actions = Vec::new();

    for (idx, (product_id, name, rupees, variant)) in CATALOG.iter().enumerate() {
        let price = Money::from_major(*rupees);

        if idx < 3 {
            let mut item = CartItem::new(
                Uuid::new_v4().to_string(),
                *product_id,
                *name,
                price,
                1,
            )
            .with_image(format!("https://cdn.aurum.example/{}.jpg", product_id));
            if let Some(variant) = variant {
                item = item.with_variant(*variant);
            }

            if idx == 0 {
                actions.push(CartAction::AddToCart(item.clone()).into());
            }
            actions.push(CartAction::AddToCart(item).into());
        } else {
            let item = WishlistItem::stamped(Uuid::new_v4().to_string(), *product_id, *name, price)
                .with_image(format!("https://cdn.aurum.example/{}.jpg", product_id));
            actions.push(WishlistAction::AddToWishlist(item).into());
        }
    }

    actions
}
