pub const BASIS_POINTS: u16 = 10_000; // 100%

pub const PLATFORM_FEE_BPS: u16 = 250; // 2.5% on primary and secondary sales
pub const MAX_ROYALTY_BPS: u16 = 1_000; // 10%
// Resale ceiling is expressed relative to face value: 100%..=500%.
pub const MIN_RESALE_CEILING_BPS: u32 = 10_000;
pub const MAX_RESALE_CEILING_BPS: u32 = 50_000;

pub const MAX_EVENT_SUPPLY: u32 = 50_000;
pub const MAX_PURCHASE_QUANTITY: u32 = 10;

pub const MAX_NAME_LEN: usize = 128;
pub const MAX_DESCRIPTION_LEN: usize = 2_048;
pub const MAX_LOCATION_LEN: usize = 256;
pub const MAX_METADATA_REF_LEN: usize = 512;
pub const MAX_QR_HASH_LEN: usize = 128;

pub const DAY_NS: u64 = 24 * 60 * 60 * 1_000_000_000;
// Attendance scanning is allowed for 24h starting at event_date.
pub const SCAN_WINDOW_NS: u64 = DAY_NS;
// Completion requires 24h past event_date, so the scan window has closed.
pub const COMPLETION_DELAY_NS: u64 = DAY_NS;

pub const MAX_ENUMERATION_LIMIT: u32 = 100;
