//! 通用工具函数

use uuid::Uuid;

/// 生成新的 UUID v7（时间有序）
pub fn new_id() -> Uuid {
    Uuid::now_v7()
}

/// 带连字符的 UUID 文本长度（8-4-4-4-12）
const HYPHENATED_LEN: usize = 36;

/// 判断字符串是否为带连字符的 UUID 格式（8-4-4-4-12）
///
/// 只做格式判断，不关心版本号。简写、花括号和 `urn:uuid:` 形式都不算。
pub fn is_uuid(value: &str) -> bool {
    value.len() == HYPHENATED_LEN && Uuid::try_parse(value).is_ok()
}

/// 按带连字符的 UUID 格式解析字符串，格式不符时返回 `None`
pub fn parse_uuid(value: &str) -> Option<Uuid> {
    if !is_uuid(value) {
        return None;
    }
    Uuid::try_parse(value).ok()
}
