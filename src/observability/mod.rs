//! 可观测性模块
//!
//! 提供简单计数指标、结构化日志初始化和健康检查。

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::config::LoggingConfig;

// ===== Simple Metrics =====

/// 应用指标
#[derive(Default)]
pub struct AppMetrics {
    pub http_requests_total: AtomicU64,
    pub chats_total: AtomicU64,
    pub chat_fallbacks_total: AtomicU64,
    pub appointments_total: AtomicU64,
    pub backups_exported_total: AtomicU64,
    pub backups_restored_total: AtomicU64,
    pub intents_added_total: AtomicU64,
    pub errors_total: AtomicU64,
}

impl AppMetrics {
    pub fn record_http_request(&self) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
    }

    /// 记录一次聊天，`fallback` 表示没有命中任何意图
    pub fn record_chat(&self, fallback: bool) {
        self.chats_total.fetch_add(1, Ordering::Relaxed);
        if fallback {
            self.chat_fallbacks_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_appointment(&self) {
        self.appointments_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_backup_exported(&self) {
        self.backups_exported_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_backup_restored(&self) {
        self.backups_restored_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_intent_added(&self) {
        self.intents_added_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// 生成 Prometheus 格式指标
    pub fn gather(&self) -> String {
        let counters = [
            ("http_requests_total", "Total HTTP requests", &self.http_requests_total),
            ("chats_total", "Chat messages answered", &self.chats_total),
            ("chat_fallbacks_total", "Chat messages without a matching intent", &self.chat_fallbacks_total),
            ("appointments_total", "Appointments submitted", &self.appointments_total),
            ("backups_exported_total", "Backups exported", &self.backups_exported_total),
            ("backups_restored_total", "Backups restored", &self.backups_restored_total),
            ("intents_added_total", "Intents added", &self.intents_added_total),
            ("errors_total", "Total errors", &self.errors_total),
        ];

        let mut out = String::new();
        for (name, help, value) in counters {
            out.push_str(&format!(
                "# HELP {name} {help}\n# TYPE {name} counter\n{name} {}\n",
                value.load(Ordering::Relaxed)
            ));
        }
        out
    }
}

// ===== Health Check =====

/// 健康检查状态
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub uptime_seconds: f64,
    pub intents_loaded: usize,
}

/// 可观测性状态
#[derive(Clone)]
pub struct ObservabilityState {
    pub metrics: Arc<AppMetrics>,
    pub start_time: DateTime<Utc>,
    pub version: String,
}

impl ObservabilityState {
    pub fn new(version: String, metrics: Arc<AppMetrics>, start_time: DateTime<Utc>) -> Self {
        Self {
            metrics,
            start_time,
            version,
        }
    }

    /// 获取应用正常运行时间
    pub fn uptime_seconds(&self) -> f64 {
        (Utc::now() - self.start_time).num_seconds() as f64
    }
}

/// 简单存活检查
pub async fn liveness() -> impl IntoResponse {
    "OK"
}

/// Prometheus 指标端点
pub async fn metrics(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    state.metrics.gather()
}

/// 版本信息端点
pub async fn version(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "version": state.version,
        "uptime_seconds": state.uptime_seconds(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// 创建可观测性路由
pub fn create_observability_router(state: Arc<ObservabilityState>) -> Router {
    Router::new()
        .route("/health/live", get(liveness))
        .route("/metrics", get(metrics))
        .route("/version", get(version))
        .with_state(state)
}

// ===== Structured Logging =====

/// 初始化结构化日志
///
/// `RUST_LOG` 优先于配置中的级别。配置了 `log_dir` 时额外按天滚动写文件，
/// 返回的 guard 必须在进程生命周期内持有。
pub fn init_tracing(config: &LoggingConfig, service_name: &str) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},{}={}", config.level, service_name, config.level)));

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, format!("{}.log", service_name));
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let (json_layer, text_layer) = if config.structured {
        (Some(fmt::layer().json().with_target(true)), None)
    } else {
        (
            None,
            Some(fmt::layer().with_target(true).with_line_number(true)),
        )
    };

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .with(file_layer)
        .try_init();

    if let Err(e) = result {
        eprintln!("tracing subscriber already set: {}", e);
    }

    guard
}

// ===== Request Metrics Middleware =====

/// 记录请求数和 5xx 错误数的中间件
pub async fn track_requests(
    State(metrics): State<Arc<AppMetrics>>,
    req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    metrics.record_http_request();
    let response = next.run(req).await;
    if response.status().is_server_error() {
        metrics.record_error();
    }
    response
}
