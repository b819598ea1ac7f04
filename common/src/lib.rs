//! OTB Helper Common Library
//!
//! Types and client-side logic shared by the CLI and the Web (WASM) front end.

pub mod types;
pub mod error;
pub mod filter;
pub mod cart;
pub mod render;
pub mod search;
pub mod export;
pub mod notice;

pub use types::{format_number, DiscRecord, StockStatus};
pub use error::{Error, Result};
pub use filter::{
    filter_all, matches, Bounds, ChangeKind, DropdownGroup, FilterControls, FilterOption,
    FilterSession, FilterState, ObservedRange, RangeEnd, RangeField, SelectField, SliderTrack,
    DEBOUNCE_MS,
};
pub use cart::{cart_key, AddOutcome, CartItem, CartStorage, CartStore, MemoryStorage, CART_STORAGE_KEY};
#[cfg(not(feature = "wasm"))]
pub use cart::JsonFileStorage;
pub use render::{search_info, DiscImage, DiscView, StockTone, ViewMode, TABLE_COLUMNS, VIEW_PREFERENCE_KEY};
pub use search::{
    health_outcome, HealthResponse, SearchError, SearchOutcome, SearchRequest, SearchResponse, SearchSequencer,
    SearchTicket, DEFAULT_MAX_RESULTS, HEALTH_PATH, HEALTH_UNREACHABLE, SEARCH_PATH, SEARCH_TIMEOUT_MS,
};
pub use export::{
    build_checkout_plan, csv_filename, csv_filename_today, export_csv, quick_find_string, CheckoutEntry, CheckoutPlan,
    CSV_HEADER,
};
pub use notice::{Notice, NoticeLevel, NOTICE_DURATION_MS};
