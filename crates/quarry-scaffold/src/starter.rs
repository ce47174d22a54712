//! Example artifacts written into new projects

pub const EXAMPLE_SCHEMA_NAME: &str = "quarry_example";
pub const EXAMPLE_FULL_MODEL_NAME: &str = "quarry_example.full_model";
pub const EXAMPLE_INCREMENTAL_MODEL_NAME: &str = "quarry_example.incremental_model";
pub const EXAMPLE_SEED_MODEL_NAME: &str = "quarry_example.seed_model";

pub const EXAMPLE_FULL_MODEL_DEF: &str = r#"MODEL (
  name quarry_example.full_model,
  kind FULL,
  cron '@daily',
  grain item_id,
  audits (assert_positive_order_ids),
);

SELECT
  item_id,
  COUNT(DISTINCT id) AS num_orders,
FROM
  quarry_example.incremental_model
GROUP BY item_id
"#;

pub const EXAMPLE_INCREMENTAL_MODEL_DEF: &str = r#"MODEL (
  name quarry_example.incremental_model,
  kind INCREMENTAL_BY_TIME_RANGE (
    time_column event_date
  ),
  start '2020-01-01',
  cron '@daily',
  grain (id, event_date)
);

SELECT
  id,
  item_id,
  event_date,
FROM
  quarry_example.seed_model
WHERE
  event_date BETWEEN @start_date AND @end_date
"#;

pub const EXAMPLE_SEED_MODEL_DEF: &str = r#"MODEL (
  name quarry_example.seed_model,
  kind SEED (
    path '../seeds/seed_data.csv'
  ),
  columns (
    id INTEGER,
    item_id INTEGER,
    event_date DATE
  ),
  grain (id, event_date)
);
"#;

pub const EXAMPLE_AUDIT_NAME: &str = "assert_positive_order_ids";

pub const EXAMPLE_AUDIT: &str = r#"AUDIT (
  name assert_positive_order_ids,
);

SELECT *
FROM @this_model
WHERE
  item_id < 0
"#;

pub const EXAMPLE_SEED_DATA: &str = r#"id,item_id,event_date
1,2,2020-01-01
2,1,2020-01-01
3,3,2020-01-03
4,1,2020-01-04
5,1,2020-01-05
6,1,2020-01-06
7,1,2020-01-07
"#;

pub const EXAMPLE_TEST: &str = r#"test_example_full_model:
  model: quarry_example.full_model
  inputs:
    quarry_example.incremental_model:
      rows:
      - id: 1
        item_id: 1
      - id: 2
        item_id: 1
      - id: 3
        item_id: 2
  outputs:
    query:
      rows:
      - item_id: 1
        num_orders: 2
      - item_id: 2
        num_orders: 1
"#;

/// Example models as (qualified name, definition)
pub const EXAMPLE_MODELS: [(&str, &str); 3] = [
    (EXAMPLE_FULL_MODEL_NAME, EXAMPLE_FULL_MODEL_DEF),
    (EXAMPLE_INCREMENTAL_MODEL_NAME, EXAMPLE_INCREMENTAL_MODEL_DEF),
    (EXAMPLE_SEED_MODEL_NAME, EXAMPLE_SEED_MODEL_DEF),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_names_match_definitions() {
        for (name, definition) in EXAMPLE_MODELS {
            assert!(name.starts_with(EXAMPLE_SCHEMA_NAME));
            assert!(definition.contains(&format!("name {},", name)));
        }
    }

    #[test]
    fn test_fixture_targets_full_model() {
        assert!(EXAMPLE_TEST.contains(&format!("model: {}\n", EXAMPLE_FULL_MODEL_NAME)));
        assert!(EXAMPLE_FULL_MODEL_DEF.contains(EXAMPLE_AUDIT_NAME));
    }
}
