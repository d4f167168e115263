//! Binance-specific configuration constants and types.

/// Configuration for Binance REST API client
/// (This is the runtime struct handed to the HTTP client builder)
pub struct BinanceApiConfig {
    pub timeout_ms: u64,
    pub retries: u32,
    pub backoff_ms: u64,
}

impl Default for BinanceApiConfig {
    fn default() -> Self {
        Self {
            timeout_ms: BINANCE.client.timeout_ms,
            retries: BINANCE.client.retries,
            backoff_ms: BINANCE.client.backoff_ms,
        }
    }
}

/// Configuration for REST API limits
pub struct RestLimits {
    /// Number of klines returned in a single request (1..=1000)
    pub klines_limit: i32,
}

/// Default values for the REST client
pub struct ClientDefaults {
    pub timeout_ms: u64,
    pub retries: u32,
    pub backoff_ms: u64,
}

/// The Master Configuration Struct
pub struct BinanceConfig {
    pub limits: RestLimits,
    pub client: ClientDefaults,
}

pub const BINANCE: BinanceConfig = BinanceConfig {
    limits: RestLimits { klines_limit: 1000 },
    client: ClientDefaults {
        timeout_ms: 10_000,
        retries: 3,
        backoff_ms: 1_000,
    },
};
