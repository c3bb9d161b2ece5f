/// Data layer: record types, loading, and range filtering.
///
/// Architecture:
/// ```text
///   data/<dataset>.csv
///        │
///        ▼
///   ┌─────────────┐
///   │ async_load  │  worker thread → loader::load_csv → Vec<Record>
///   └─────────────┘
///        │  polled once per frame
///        ▼
///   ┌─────────────┐
///   │   model     │  TemperatureRecord / PayGapRecord / JobPayRecord, Summary
///   └─────────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │   filter    │  ViewRange → rows inside [start, end]
///   └─────────────┘
/// ```

pub mod async_load;
pub mod filter;
pub mod loader;
pub mod model;
