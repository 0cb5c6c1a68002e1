//! 商品目录业务逻辑

use std::sync::Arc;

use storefront_common::{Pagination, PaginationDefaults};
use storefront_errors::{AppError, AppResult};
use storefront_ports::{Fetch, StoreError, StoreResult, UnitOfWork};
use tracing::{Span, debug, error, info, info_span, warn};

use super::commands::{CreateProductCommand, UpdateProductCommand};
use super::dto::ProductView;
use super::queries::PaginationQuery;
use crate::domain::{
    CatalogUnitOfWork, Product, ProductId, ProductLookup, ProductRepository, UnitOfWorkFactory,
};

/// 非唯一约束类存储错误对外返回的固定消息
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected error, check server logs";

/// 商品目录服务
pub struct ProductCatalogService {
    product_repo: Arc<dyn ProductRepository>,
    uow_factory: Arc<dyn UnitOfWorkFactory>,
    pagination: PaginationDefaults,
    span: Span,
}

impl ProductCatalogService {
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        uow_factory: Arc<dyn UnitOfWorkFactory>,
    ) -> Self {
        Self {
            product_repo,
            uow_factory,
            pagination: PaginationDefaults::default(),
            span: info_span!("product_catalog"),
        }
    }

    /// 设置分页默认值
    pub fn with_pagination_defaults(mut self, defaults: PaginationDefaults) -> Self {
        self.pagination = defaults;
        self
    }

    /// 设置日志 span，服务内所有日志都挂在该 span 下
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// 创建商品（图片随商品一次写入）
    pub async fn create(&self, cmd: CreateProductCommand) -> AppResult<ProductView> {
        let (fields, images) = cmd.into_parts();
        let product = Product::new(fields, &images);

        self.product_repo
            .save(&product)
            .await
            .map_err(|e| self.classify(e))?;

        info!(
            parent: &self.span,
            product_id = %product.id,
            slug = %product.slug,
            images = images.len(),
            "Product created"
        );

        Ok(ProductView {
            images,
            ..ProductView::from(product)
        })
    }

    /// 分页查询商品，图片随商品一起加载
    pub async fn find_all(&self, query: PaginationQuery) -> AppResult<Vec<ProductView>> {
        let pagination = Pagination::resolve(query.limit, query.offset, &self.pagination);

        let products = self
            .product_repo
            .find_all(&pagination, Fetch::Eager)
            .await
            .map_err(|e| self.classify(e))?;

        debug!(
            parent: &self.span,
            limit = pagination.limit,
            offset = pagination.offset,
            found = products.len(),
            "Products listed"
        );

        Ok(products.into_iter().map(ProductView::from).collect())
    }

    /// 按 ID（UUID 格式）或 slug 查找商品
    pub async fn find_one(&self, term: &str) -> AppResult<ProductView> {
        let found = match ProductLookup::from_term(term) {
            ProductLookup::Id(id) => self.product_repo.find_by_id(&id, Fetch::Eager).await,
            ProductLookup::Slug(slug) => {
                self.product_repo.find_by_slug(&slug, Fetch::Eager).await
            }
        };

        let product = found
            .map_err(|e| self.classify(e))?
            .ok_or_else(|| {
                AppError::not_found(format!("Product with term \"{}\" not found", term))
            })?;

        Ok(ProductView::from(product))
    }

    /// 更新商品
    ///
    /// 先预加载并合并字段（不写库），再在一个事务内替换图片并保存商品。
    pub async fn update(&self, id: &str, cmd: UpdateProductCommand) -> AppResult<ProductView> {
        let product_id = parse_product_id(id)?;
        let (changes, images) = cmd.into_parts();
        let fields_changed = !changes.is_empty();

        let mut product = self
            .product_repo
            .preload(&product_id, changes)
            .await
            .map_err(|e| self.classify(e))?
            .ok_or_else(|| AppError::not_found(format!("Product with id: {} not found", id)))?;

        let uow = self
            .uow_factory
            .begin()
            .await
            .map_err(|e| self.classify(e))?;

        let replaced_images = images.as_ref().map(Vec::len);

        match write_update(uow.as_ref(), &mut product, images).await {
            Ok(()) => uow.commit().await.map_err(|e| self.classify(e))?,
            Err(e) => {
                if let Err(rollback_err) = uow.rollback().await {
                    warn!(
                        parent: &self.span,
                        product_id = %product_id,
                        error = %rollback_err,
                        "Failed to rollback product update"
                    );
                }
                return Err(self.classify(e));
            }
        }

        info!(
            parent: &self.span,
            product_id = %product_id,
            fields_changed,
            replaced_images = ?replaced_images,
            "Product updated"
        );

        Ok(ProductView::from(product))
    }

    /// 按 ID 删除商品（图片级联删除）
    pub async fn remove(&self, id: &str) -> AppResult<()> {
        let product_id = parse_product_id(id)?;

        self.product_repo
            .find_by_id(&product_id, Fetch::Lazy)
            .await
            .map_err(|e| self.classify(e))?
            .ok_or_else(|| AppError::not_found(format!("Product with id \"{}\" not found", id)))?;

        self.product_repo
            .delete(&product_id)
            .await
            .map_err(|e| self.classify(e))?;

        info!(parent: &self.span, product_id = %product_id, "Product removed");
        Ok(())
    }

    /// 删除全部商品，仅用于测试与运维
    pub async fn delete_all_products(&self) -> AppResult<u64> {
        let deleted = self
            .product_repo
            .delete_all()
            .await
            .map_err(|e| self.classify(e))?;

        warn!(parent: &self.span, deleted, "All products deleted");
        Ok(deleted)
    }

    /// 存储错误分类
    ///
    /// 唯一约束冲突原样返回 detail，其余错误记录日志后只返回固定消息。
    pub fn classify(&self, error: StoreError) -> AppError {
        metrics::counter!("catalog_store_errors_total", "kind" => error.kind()).increment(1);

        match error {
            StoreError::UniqueViolation { detail, .. } => AppError::bad_request(detail),
            other => {
                error!(parent: &self.span, kind = other.kind(), error = ?other, "Store error");
                AppError::internal(UNEXPECTED_ERROR_MESSAGE)
            }
        }
    }
}

/// 事务内的写操作：按需替换图片，然后保存商品
async fn write_update(
    uow: &dyn CatalogUnitOfWork,
    product: &mut Product,
    images: Option<Vec<String>>,
) -> StoreResult<()> {
    if let Some(urls) = images {
        uow.product_images().delete_by_product(&product.id).await?;
        product.replace_images(&urls);
    }

    uow.products().save(product).await
}

fn parse_product_id(id: &str) -> AppResult<ProductId> {
    id.parse::<ProductId>()
        .map_err(|e| AppError::bad_request(e.to_string()))
}
