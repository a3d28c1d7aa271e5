//! Basic dataset -> block -> merge -> candidate pairs flow.

use reclink::*;
use serde_json::json;

fn main() -> ReclinkResult<()> {
    env_logger::init();

    // Two datasets to link: a census extract and a civil registry.
    let census = InMemoryDataset::from_raw_objects(
        "census",
        vec![
            json!({"id": "a1", "name": "john", "city": "berlin"}),
            json!({"id": "a2", "name": "mary", "city": "hamburg"}),
            json!({"id": "a3", "name": "john", "city": "munich"}),
        ],
    )?;
    let registry = InMemoryDataset::from_raw_objects(
        "registry",
        vec![
            json!({"id": "b1", "name": "john", "city": "berlin"}),
            json!({"id": "b2", "name": "anna", "city": "bremen"}),
        ],
    )?;

    // Block each dataset on the `name` attribute, sharing one black list.
    let generator = HashBlockGenerator::new();
    let mut black_list = BlockBlackList::new(100);
    let block_a = generator.block(
        &census,
        KeySource::Attribute("name"),
        None,
        Some(&mut black_list),
    )?;
    let block_b = generator.block(
        &registry,
        KeySource::Attribute("name"),
        None,
        Some(&mut black_list),
    )?;

    // Merge into one combined candidate structure.
    let merged = generator.generate(&block_a, &block_b, None)?;
    println!(
        "Merged block: {} keys, {} memberships",
        merged.key_count(),
        merged.len()
    );

    // Candidate pairs for the downstream similarity stage: records sharing a
    // key but belonging to different datasets.
    for ((ds1, rid1), (ds2, rid2)) in merged.candidate_pairs(true) {
        println!("  candidate pair: {}/{} <-> {}/{}", ds1, rid1, ds2, rid2);
    }

    Ok(())
}
