/// Request timeout applied by the HTTP transport, in seconds
pub const DEFAULT_TIMEOUT: u64 = 5;

pub const DEFAULT_SCHEME: &str = "http";
pub const DEFAULT_BASE: &str = "/sony";

/// Header carrying the pre-shared key configured on the TV
pub const PSK_HEADER: &str = "X-Auth-PSK";

// The protocol reserves id 0
pub const TRANSACTION_ID_MIN: u32 = 1;
pub const TRANSACTION_ID_MAX: u32 = 2_147_483_647;

pub const ENV_HOST: &str = "BRAVIA_HOST";
pub const ENV_SCHEME: &str = "BRAVIA_SCHEME";
pub const ENV_BASE: &str = "BRAVIA_BASE";
pub const ENV_PSK: &str = "BRAVIA_PSK";
