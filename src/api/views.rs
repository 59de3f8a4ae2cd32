//! HTML 页面
//!
//! 首页、预约表单和备份查看页，用 Tera 模板渲染。模板随二进制一起编译进来，
//! 以 `.html` 结尾的模板默认开启转义，用户数据不会被当作标记输出。

use tera::{Context, Tera};

use crate::models::BackupDocument;

const TEMPLATES: [(&str, &str); 4] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("index.html", include_str!("../../templates/index.html")),
    ("appointment.html", include_str!("../../templates/appointment.html")),
    ("backup.html", include_str!("../../templates/backup.html")),
];

/// 页面渲染器
#[derive(Debug)]
pub struct Views {
    tera: Tera,
}

impl Views {
    /// 解析内置模板
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        Ok(Self { tera })
    }

    pub fn index_page(&self) -> Result<String, tera::Error> {
        self.tera.render("index.html", &Context::new())
    }

    pub fn appointment_page(&self, success: bool) -> Result<String, tera::Error> {
        let mut ctx = Context::new();
        ctx.insert("success", &success);
        self.tera.render("appointment.html", &ctx)
    }

    pub fn backup_page(&self, doc: &BackupDocument) -> Result<String, tera::Error> {
        let mut ctx = Context::new();
        ctx.insert("appointments", &doc.appointments);
        ctx.insert("chat_logs", &doc.chat_logs);
        self.tera.render("backup.html", &ctx)
    }
}
