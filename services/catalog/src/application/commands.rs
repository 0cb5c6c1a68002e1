//! 商品命令

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::domain::{NewProduct, ProductChanges};

/// 创建商品命令
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateProductCommand {
    pub name: String,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub stock: Option<i32>,
    pub sizes: Vec<String>,
    pub gender: String,
    pub tags: Vec<String>,
    /// 图片 URL，可为空
    pub images: Vec<String>,
}

impl CreateProductCommand {
    /// 拆分为商品字段与图片 URL
    pub fn into_parts(self) -> (NewProduct, Vec<String>) {
        let fields = NewProduct {
            name: self.name,
            price: self.price,
            description: self.description,
            slug: self.slug,
            stock: self.stock,
            sizes: self.sizes,
            gender: self.gender,
            tags: self.tags,
        };
        (fields, self.images)
    }
}

/// 更新商品命令
///
/// `images` 为 `Some` 时整体替换图片（`Some(vec![])` 清空全部图片），
/// 为 `None` 时保留现有图片。`description` 为 `Some(None)`（JSON `null`）时清空描述。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateProductCommand {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    #[serde(deserialize_with = "explicit_null")]
    pub description: Option<Option<String>>,
    pub slug: Option<String>,
    pub stock: Option<i32>,
    pub sizes: Option<Vec<String>>,
    pub gender: Option<String>,
    pub tags: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
}

impl UpdateProductCommand {
    /// 拆分为字段变更与（可选的）新图片列表
    pub fn into_parts(self) -> (ProductChanges, Option<Vec<String>>) {
        let changes = ProductChanges {
            name: self.name,
            price: self.price,
            description: self.description,
            slug: self.slug,
            stock: self.stock,
            sizes: self.sizes,
            gender: self.gender,
            tags: self.tags,
        };
        (changes, self.images)
    }
}

/// 缺省字段为 `None`，显式 `null` 为 `Some(None)`
fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_images_key_presence() {
        let absent: UpdateProductCommand = serde_json::from_str(r#"{"stock": 3}"#).unwrap();
        assert_eq!(absent.images, None);

        let cleared: UpdateProductCommand = serde_json::from_str(r#"{"images": []}"#).unwrap();
        assert_eq!(cleared.images, Some(vec![]));
    }

    #[test]
    fn test_description_null_clears() {
        let absent: UpdateProductCommand = serde_json::from_str(r#"{"stock": 3}"#).unwrap();
        assert_eq!(absent.description, None);

        let cleared: UpdateProductCommand =
            serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(cleared.description, Some(None));

        let set: UpdateProductCommand =
            serde_json::from_str(r#"{"description": "Soft cotton"}"#).unwrap();
        assert_eq!(set.description, Some(Some("Soft cotton".to_string())));
    }

    #[test]
    fn test_create_command_defaults() {
        let cmd: CreateProductCommand =
            serde_json::from_str(r#"{"name": "Kids Tee", "gender": "kid", "sizes": ["XS"]}"#)
                .unwrap();
        let (fields, images) = cmd.into_parts();

        assert_eq!(fields.name, "Kids Tee");
        assert_eq!(fields.price, None);
        assert!(images.is_empty());
    }
}
