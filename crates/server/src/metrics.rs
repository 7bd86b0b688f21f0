use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, register_int_gauge, Encoder, IntCounterVec, IntGauge, TextEncoder};

// Prometheus metrics (default registry)
pub static CUSTOMER_OPS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "crm_customer_operations_total",
        "Customer store operations by operation and outcome",
        &["op", "outcome"]
    )
    .expect("register customer_operations_total")
});

pub static CUSTOMERS_STORED: Lazy<IntGauge> = Lazy::new(|| {
    register_int_gauge!("crm_customers_stored", "Customer records currently held in memory")
        .expect("register customers_stored")
});

pub fn record_op(op: &str, outcome: &str) {
    CUSTOMER_OPS_TOTAL.with_label_values(&[op, outcome]).inc();
}

pub fn set_stored(count: usize) {
    CUSTOMERS_STORED.set(count as i64);
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("metrics encode error: {e}"));
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}
