//! 预约记录模型

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 预约记录
///
/// 表单字段原样保存，序列化时和 `timestamp` 平铺在同一个对象里。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRecord {
    /// 表单字段
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
    /// 分钟精度时间戳；恢复的旧记录可能没有
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl AppointmentRecord {
    /// 以当前时间创建记录，表单里的 `timestamp` 字段会被覆盖
    pub fn now(mut fields: BTreeMap<String, String>) -> Self {
        fields.remove("timestamp");
        Self {
            fields,
            timestamp: Some(super::minute_timestamp()),
        }
    }

    /// 读取表单字段
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appointment_serializes_flat() {
        let record = AppointmentRecord {
            fields: BTreeMap::from([("name".to_string(), "A".to_string())]),
            timestamp: Some("2024-01-01 10:00".to_string()),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "A", "timestamp": "2024-01-01 10:00"})
        );

        let back: AppointmentRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_now_overrides_form_timestamp() {
        let fields = BTreeMap::from([
            ("name".to_string(), "B".to_string()),
            ("timestamp".to_string(), "forged".to_string()),
        ]);
        let record = AppointmentRecord::now(fields);
        assert!(record.timestamp.is_some());
        assert_ne!(record.timestamp.as_deref(), Some("forged"));
        assert_eq!(record.field("name"), Some("B"));
        assert!(record.field("timestamp").is_none());
    }

    #[test]
    fn test_record_without_timestamp_stays_without_one() {
        let record: AppointmentRecord =
            serde_json::from_value(serde_json::json!({"name": "A"})).unwrap();
        assert_eq!(record.timestamp, None);
        assert_eq!(record.field("name"), Some("A"));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, serde_json::json!({"name": "A"}));
    }
}
