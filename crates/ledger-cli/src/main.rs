use std::collections::BTreeMap;
use std::error::Error;

use chrono::{DateTime, Duration, Utc};
use ledger_core::{
    Action, Item, ItemCategory, ItemClass, ItemKind, ItemType, Registry, RegistryConfig,
};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// One category's derived views, flattened for JSON output.
#[derive(Debug, Serialize)]
struct CategoryReport {
    category: String,
    item_ids: Vec<String>,
    actions_by_time: Vec<Action>,
    totals: BTreeMap<String, i128>,
    /// `None` when nothing was ever done to an item of this category.
    highest: Option<Vec<Leader>>,
}

#[derive(Debug, Serialize)]
struct Leader {
    id: String,
    name: String,
    total: i128,
}

fn report<C: ItemCategory>(registry: &Registry<C>, class: C::Class, label: String) -> CategoryReport {
    registry.with_query(|q| CategoryReport {
        category: label,
        item_ids: q
            .item_ids_of_category(class)
            .into_iter()
            .map(String::from)
            .collect(),
        actions_by_time: q.actions_of_category_sorted_by_time(class),
        totals: q
            .total_cost_by_item_id_for_category(class)
            .into_iter()
            .map(|(id, total)| (id.to_string(), total))
            .collect(),
        highest: q.items_with_highest_cost_for_category(class).map(|leaders| {
            let mut leaders: Vec<Leader> = leaders
                .into_iter()
                .map(|(item, total)| Leader {
                    id: item.id().to_string(),
                    name: item.name().to_string(),
                    total,
                })
                .collect();
            leaders.sort_by(|a, b| a.id.cmp(&b.id));
            leaders
        }),
    })
}

fn print_json<T: Serialize>(title: &str, value: &T) -> Result<(), Box<dyn Error>> {
    println!("== {title}");
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Tagged catalog: the A/B/C walkthrough.
fn run_item_types(t0: DateTime<Utc>) -> Result<(), Box<dyn Error>> {
    let registry = Registry::<ItemType>::builder()
        .config(RegistryConfig::default())
        .build()?;

    for (id, category, name) in [
        ("A123", ItemType::A, "Item A1"),
        ("B123", ItemType::B, "Item B1"),
        ("B456", ItemType::B, "Item B2"),
        ("C111", ItemType::C, "Item C1"),
        ("C222", ItemType::C, "Item C2"),
    ] {
        registry.register_new_item(id, category, name)?;
    }

    registry.register_action("A123", "Throw", 5000, t0)?;
    registry.register_action("B123", "Meet", 1000, t0 - Duration::minutes(30))?;
    registry.register_action("b123", "Greet", 1000, t0 - Duration::minutes(20))?;
    registry.register_action("B456", "Feet", 1000, t0 - Duration::minutes(10))?;
    registry.register_action("C111", "Sheet", 100, t0)?;
    let last = registry.register_action("C222", "Leet", 100, t0 - Duration::minutes(5))?;

    info!(
        items = registry.item_count(),
        actions = registry.action_count(),
        "item type catalog ready"
    );

    // Rejected registrations leave the registry untouched.
    if let Err(err) = registry.register_new_item("a123", ItemType::C, "Duplicate") {
        println!("rejected: {err}");
    }
    if let Err(err) = registry.register_action("Z999", "Ghost", 1, t0) {
        println!("rejected: {err}");
    }

    let reports: Vec<_> = ItemType::ALL
        .into_iter()
        .map(|tag| report(&registry, tag, tag.to_string()))
        .collect();
    print_json("item type reports", &reports)?;

    let (action, item) = registry.action_with_item(last)?;
    println!("{} was \"{}\" on {} ({})", action.id(), action.description(), item.id(), item.name());
    Ok(())
}

/// Variant catalog: balls, boxes and dogs grouped by concrete class.
fn run_item_kinds(t0: DateTime<Utc>) -> Result<(), Box<dyn Error>> {
    let registry: Registry<ItemKind> = Registry::new();

    let catalog = [
        Item::parse(
            "ball1",
            ItemKind::Ball {
                color: "red".to_string(),
                radius: 0.5,
            },
            "Beach ball",
        )?,
        Item::parse(
            "box1",
            ItemKind::Box {
                color: "brown".to_string(),
                height: 1.0,
                depth: 2.0,
                width: 0.5,
            },
            "Moving box",
        )?,
        Item::parse(
            "ball2",
            ItemKind::Ball {
                color: "white".to_string(),
                radius: 0.1,
            },
            "Golf ball",
        )?,
    ];
    for item in catalog {
        registry.register_item(item)?;
    }
    registry.register_action("ball1", "Bounce", 3, t0)?;
    registry.register_action("box1", "Stack", 7, t0)?;

    let partition: BTreeMap<String, Vec<Item<ItemKind>>> = registry
        .partition_by_concrete_class(None)
        .into_iter()
        .map(|(class, items)| (format!("{class} ({:?})", class.family()), items))
        .collect();
    print_json("partition by class", &partition)?;

    let filtered = registry.partition_by_concrete_class(Some(&[ItemClass::Box, ItemClass::Dog]));
    println!(
        "filtered to Box/Dog: {:?}",
        filtered.keys().map(ToString::to_string).collect::<Vec<_>>()
    );

    for item in registry.all_items() {
        if let Some(volume) = item.category().volume() {
            println!("{} volume={volume:.3}", item.id());
        }
    }

    let reports: Vec<_> = ItemClass::ALL
        .into_iter()
        .map(|class| report(&registry, class, class.to_string()))
        .collect();
    print_json("item class reports", &reports)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let t0 = Utc::now();
    run_item_types(t0)?;
    run_item_kinds(t0)?;
    Ok(())
}
