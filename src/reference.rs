//! Reference sets the classifier matches pages against.
//!
//! The built-in data covers the most populous mainland cities and the most
//! common surnames. An alternate set can be loaded from a JSON file with
//! any subset of the keys `cities`, `surnames`, `subpages`, `meta_fields`;
//! missing keys keep their built-in values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CITIES: &[&str] = &[
    "北京", "上海", "广州", "深圳", "杭州", "南京", "苏州", "成都", "武汉", "重庆",
    "天津", "西安", "长沙", "沈阳", "青岛", "郑州", "大连", "东莞", "宁波", "厦门",
    "福州", "无锡", "合肥", "昆明", "哈尔滨", "济南", "佛山", "长春", "温州", "石家庄",
    "南宁", "常州", "泉州", "南昌", "贵阳", "太原", "烟台", "嘉兴", "南通", "金华",
    "珠海", "惠州", "徐州", "海口", "乌鲁木齐", "绍兴", "中山", "台州", "兰州",
];

const SURNAMES: &[&str] = &[
    "王", "李", "张", "刘", "陈", "杨", "赵", "黄", "周", "吴", "徐", "孙", "胡", "朱", "高",
    "林", "何", "郭", "马", "罗", "梁", "宋", "郑", "谢", "韩", "唐", "冯", "于", "董", "萧",
    "程", "曹", "袁", "邓", "许", "傅", "沈", "曾", "彭", "吕", "苏", "卢", "蒋", "蔡", "贾",
    "丁", "魏", "薛", "叶", "阎", "余", "潘", "杜", "戴", "夏", "钟", "汪", "田", "任", "姜",
];

const SUBPAGES: &[&str] = &["about", "privacy", "contact", "team", "company", "careers"];

const META_FIELDS: &[&str] = &[
    "description",
    "keywords",
    "author",
    "title",
    "og:title",
    "og:description",
    "twitter:title",
    "twitter:description",
];

#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("failed to read reference data {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid reference data {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Immutable lookup tables shared by every classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceData {
    /// City names matched as substrings of visible text.
    pub cities: BTreeSet<String>,
    /// Surnames matched as substrings of visible text.
    pub surnames: BTreeSet<String>,
    /// Path segments probed, in order, when the main page has no signal.
    pub subpages: Vec<String>,
    /// Lowercase `<meta>` names worth keeping in a page analysis.
    pub meta_fields: BTreeSet<String>,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            cities: CITIES.iter().map(|s| s.to_string()).collect(),
            surnames: SURNAMES.iter().map(|s| s.to_string()).collect(),
            subpages: SUBPAGES.iter().map(|s| s.to_string()).collect(),
            meta_fields: META_FIELDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ReferenceData {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let mut data: Self = serde_json::from_str(json)?;
        data.meta_fields = data
            .meta_fields
            .into_iter()
            .map(|field| field.to_lowercase())
            .collect();
        Ok(data)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ReferenceError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ReferenceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw).map_err(|source| ReferenceError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn is_useful_meta(&self, name: &str) -> bool {
        self.meta_fields.contains(name)
    }
}
