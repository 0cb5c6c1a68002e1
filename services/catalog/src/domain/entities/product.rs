//! 商品实体

use rust_decimal::Decimal;

use super::ProductImage;
use crate::domain::value_objects::{ProductId, ProductSlug};

/// 新建商品所需字段
#[derive(Debug, Clone, Default)]
pub struct NewProduct {
    pub name: String,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub stock: Option<i32>,
    pub sizes: Vec<String>,
    pub gender: String,
    pub tags: Vec<String>,
}

/// 商品部分更新，`None` 表示保持原值
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    /// `Some(None)` 清空描述
    pub description: Option<Option<String>>,
    pub slug: Option<String>,
    pub stock: Option<i32>,
    pub sizes: Option<Vec<String>>,
    pub gender: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// 商品聚合根
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub slug: ProductSlug,
    pub stock: i32,
    pub sizes: Vec<String>,
    pub gender: String,
    pub tags: Vec<String>,
    /// 有序图片列表
    pub images: Vec<ProductImage>,
}

impl Product {
    /// 创建商品，每个 URL 生成一张图片
    pub fn new<S: AsRef<str>>(fields: NewProduct, image_urls: &[S]) -> Self {
        let slug = ProductSlug::from_name_or(fields.slug.as_deref(), &fields.name);

        Self {
            id: ProductId::new(),
            name: fields.name,
            price: fields.price.unwrap_or_default(),
            description: fields.description,
            slug,
            stock: fields.stock.unwrap_or_default(),
            sizes: fields.sizes,
            gender: fields.gender,
            tags: fields.tags,
            images: Self::build_images(image_urls),
        }
    }

    /// 在内存中合并字段（不写库）
    pub fn apply_changes(&mut self, changes: ProductChanges) {
        let ProductChanges {
            name,
            price,
            description,
            slug,
            stock,
            sizes,
            gender,
            tags,
        } = changes;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(slug) = slug {
            self.slug = ProductSlug::new(&slug);
        }
        if let Some(stock) = stock {
            self.stock = stock;
        }
        if let Some(sizes) = sizes {
            self.sizes = sizes;
        }
        if let Some(gender) = gender {
            self.gender = gender;
        }
        if let Some(tags) = tags {
            self.tags = tags;
        }
    }

    /// 整体替换图片集合，旧图片不保留
    pub fn replace_images<S: AsRef<str>>(&mut self, image_urls: &[S]) {
        self.images = Self::build_images(image_urls);
    }

    /// 按顺序返回图片 URL
    pub fn image_urls(&self) -> Vec<String> {
        self.images.iter().map(|image| image.url.clone()).collect()
    }

    fn build_images<S: AsRef<str>>(image_urls: &[S]) -> Vec<ProductImage> {
        image_urls
            .iter()
            .map(|url| ProductImage::new(url.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shirt() -> NewProduct {
        NewProduct {
            name: "Men's Quilted Shirt Jacket".to_string(),
            price: Some(Decimal::new(8500, 2)),
            description: Some("Quilted shirt jacket".to_string()),
            sizes: vec!["S".to_string(), "M".to_string()],
            gender: "men".to_string(),
            tags: vec!["jacket".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_new_product() {
        let product = Product::new(shirt(), &["1740250-00-A_0_2000.jpg", "1740250-00-A_1.jpg"]);

        assert_eq!(product.slug.as_str(), "mens_quilted_shirt_jacket");
        assert_eq!(product.stock, 0);
        assert_eq!(product.price, Decimal::new(8500, 2));
        assert_eq!(
            product.image_urls(),
            vec!["1740250-00-A_0_2000.jpg", "1740250-00-A_1.jpg"]
        );
        assert_ne!(product.images[0].id, product.images[1].id);
    }

    #[test]
    fn test_new_product_defaults() {
        let fields = NewProduct {
            name: "Kids Tee".to_string(),
            gender: "kid".to_string(),
            ..Default::default()
        };
        let product = Product::new(fields, &[] as &[&str]);

        assert_eq!(product.price, Decimal::ZERO);
        assert_eq!(product.stock, 0);
        assert!(product.images.is_empty());
    }

    #[test]
    fn test_apply_changes_only_touches_supplied_fields() {
        let mut product = Product::new(shirt(), &["a.jpg"]);
        let before = product.clone();

        product.apply_changes(ProductChanges {
            stock: Some(7),
            slug: Some("Quilted Jacket".to_string()),
            ..Default::default()
        });

        assert_eq!(product.stock, 7);
        assert_eq!(product.slug.as_str(), "quilted_jacket");
        assert_eq!(product.name, before.name);
        assert_eq!(product.images, before.images);
    }

    #[test]
    fn test_apply_changes_description() {
        let mut product = Product::new(shirt(), &["a.jpg"]);

        product.apply_changes(ProductChanges::default());
        assert_eq!(product.description.as_deref(), Some("Quilted shirt jacket"));

        product.apply_changes(ProductChanges {
            description: Some(Some("Padded".to_string())),
            ..Default::default()
        });
        assert_eq!(product.description.as_deref(), Some("Padded"));

        product.apply_changes(ProductChanges {
            description: Some(None),
            ..Default::default()
        });
        assert_eq!(product.description, None);
    }

    #[test]
    fn test_replace_images() {
        let mut product = Product::new(shirt(), &["a.jpg", "b.jpg"]);
        product.replace_images(&["c.jpg"]);
        assert_eq!(product.image_urls(), vec!["c.jpg"]);

        product.replace_images(&[] as &[&str]);
        assert!(product.images.is_empty());
    }

    #[test]
    fn test_empty_changes() {
        assert!(ProductChanges::default().is_empty());
        assert!(
            !ProductChanges {
                name: Some("x".to_string()),
                ..Default::default()
            }
            .is_empty()
        );
    }
}
