//! Display-language selection and the two string catalogs.
//!
//! Lookup falls back from the active language to English, then to the key
//! itself. The selection persists under [`LANG_KEY`] and defaults to
//! Chinese; both defaults are fixed at build time. The mobile-only keys
//! (`tab.*`, `home.*`) ship in English only.

use crate::storage::{KeyValueStore, LANG_KEY};

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    Zh,
    En,
}

impl Lang {
    /// Parse a persisted tag; anything unrecognized selects the default.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "en" => Lang::En,
            _ => Lang::Zh,
        }
    }

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Lang::Zh => "zh",
            Lang::En => "en",
        }
    }
}

/// Read the persisted language selection.
#[must_use]
pub fn active_lang(storage: &dyn KeyValueStore) -> Lang {
    storage.get(LANG_KEY).map_or(Lang::default(), |tag| Lang::from_tag(&tag))
}

/// Persist the language selection.
pub fn set_lang(storage: &dyn KeyValueStore, lang: Lang) {
    storage.set(LANG_KEY, lang.tag());
}

/// Look up `key` in the given language, falling back to English and then to
/// the key itself.
#[must_use]
pub fn translate(lang: Lang, key: &str) -> &str {
    lookup(lang, key)
        .or_else(|| lookup(Lang::En, key))
        .unwrap_or(key)
}

fn lookup(lang: Lang, key: &str) -> Option<&'static str> {
    let table = match lang {
        Lang::Zh => ZH,
        Lang::En => EN,
    };
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

const ZH: &[(&str, &str)] = &[
    ("menu.calendar", "排班日历"),
    ("menu.schedule", "排班管理"),
    ("menu.doctors", "医生管理"),
    ("menu.departments", "科室管理"),
    ("menu.rooms", "诊室管理"),
    ("menu.shifts", "班次管理"),
    ("menu.trades", "换班审批"),
    ("menu.preferences", "意愿管理"),
    ("menu.stats", "统计报表"),
    ("menu.settings", "系统设置"),
    ("menu.feedback", "用户反馈"),
    ("menu.audit", "审计日志"),
    ("menu.logout", "退出登录"),
    ("common.systemName", "医院排班系统"),
    ("common.welcome", "欢迎"),
    ("common.login", "登录"),
    ("common.logout", "退出"),
    ("common.add", "添加"),
    ("common.edit", "编辑"),
    ("common.delete", "删除"),
    ("common.save", "保存"),
    ("common.cancel", "取消"),
    ("common.confirm", "确认"),
    ("common.search", "搜索"),
    ("common.actions", "操作"),
    ("common.status", "状态"),
    ("common.success", "成功"),
    ("common.fail", "失败"),
];

const EN: &[(&str, &str)] = &[
    ("menu.calendar", "Schedule Calendar"),
    ("menu.schedule", "Schedule Mgmt"),
    ("menu.doctors", "Doctor Mgmt"),
    ("menu.departments", "Department Mgmt"),
    ("menu.rooms", "Room Mgmt"),
    ("menu.shifts", "Shift Types"),
    ("menu.trades", "Trade Approvals"),
    ("menu.preferences", "Preferences"),
    ("menu.stats", "Statistics"),
    ("menu.settings", "Settings"),
    ("menu.feedback", "Feedback"),
    ("menu.audit", "Audit Logs"),
    ("menu.logout", "Logout"),
    ("common.systemName", "Doctor Scheduling System"),
    ("common.welcome", "Welcome"),
    ("common.login", "Login"),
    ("common.logout", "Logout"),
    ("common.add", "Add"),
    ("common.edit", "Edit"),
    ("common.delete", "Delete"),
    ("common.save", "Save"),
    ("common.cancel", "Cancel"),
    ("common.confirm", "Confirm"),
    ("common.search", "Search"),
    ("common.actions", "Actions"),
    ("common.status", "Status"),
    ("common.success", "Success"),
    ("common.fail", "Failed"),
    ("common.loading", "Loading..."),
    ("common.submit", "Submit"),
    ("common.switchLang", "Switch Lang"),
    ("tab.home", "My Schedule"),
    ("tab.trade", "Trades"),
    ("tab.pref", "Preferences"),
    ("tab.mine", "Profile"),
    ("home.title", "Schedule"),
    ("home.empty", "No schedule"),
    ("home.tradeBtn", "Trade"),
];

#[cfg(test)]
#[path = "i18n_test.rs"]
mod tests;
