//! 测试用内存仓储与工作单元
//!
//! 仓储与工作单元共享同一份状态。工作单元内的写操作先暂存，提交时才生效；
//! 唯一约束在写入时检查，与数据库的行为一致。

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use catalog::ProductCatalogService;
use catalog::domain::{
    CatalogUnitOfWork, Product, ProductId, ProductImageRepository, ProductRepository,
    ProductWriteRepository, UnitOfWorkFactory,
};
use storefront_common::Pagination;
use storefront_ports::{Fetch, PageableRepository, Repository, StoreError, StoreResult, UnitOfWork};

/// 可注入故障的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    FindById,
    FindBySlug,
    FindAll,
    Save,
    Delete,
    DeleteAll,
    Begin,
    TxSave,
    TxDeleteImages,
    Commit,
}

/// 事务计数
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TxStats {
    pub begun: usize,
    pub committed: usize,
    pub rolled_back: usize,
    pub released: usize,
}

#[derive(Default)]
struct CatalogState {
    products: BTreeMap<ProductId, Product>,
    failures: HashMap<Op, StoreError>,
    stats: TxStats,
}

impl CatalogState {
    fn check(&self, op: Op) -> StoreResult<()> {
        match self.failures.get(&op) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    /// 模拟 products 表的 name / slug 唯一约束
    fn check_unique(&self, product: &Product) -> StoreResult<()> {
        for other in self.products.values().filter(|p| p.id != product.id) {
            if other.slug == product.slug {
                return Err(StoreError::UniqueViolation {
                    constraint: Some("products_slug_key".to_string()),
                    detail: format!("Key (slug)=({}) already exists.", product.slug),
                });
            }
            if other.name == product.name {
                return Err(StoreError::UniqueViolation {
                    constraint: Some("products_name_key".to_string()),
                    detail: format!("Key (name)=({}) already exists.", product.name),
                });
            }
        }
        Ok(())
    }

    /// upsert 商品行，已存在的图片保留，新图片追加
    fn upsert(&mut self, product: &Product) {
        let mut stored = product.clone();
        if let Some(existing) = self.products.get(&product.id) {
            let mut images = existing.images.clone();
            images.extend(
                product
                    .images
                    .iter()
                    .filter(|image| !existing.images.iter().any(|e| e.id == image.id))
                    .cloned(),
            );
            stored.images = images;
        }
        self.products.insert(product.id, stored);
    }

    fn delete_images(&mut self, product_id: &ProductId) -> u64 {
        self.products
            .get_mut(product_id)
            .map(|product| std::mem::take(&mut product.images).len() as u64)
            .unwrap_or(0)
    }
}

fn load(product: &Product, fetch: Fetch) -> Product {
    let mut product = product.clone();
    if !fetch.is_eager() {
        product.images.clear();
    }
    product
}

/// 内存商品目录，同时充当仓储与工作单元工厂
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    state: Arc<Mutex<CatalogState>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().unwrap()
    }

    pub fn fail_on(&self, op: Op, error: StoreError) {
        self.state().failures.insert(op, error);
    }

    pub fn clear_failures(&self) {
        self.state().failures.clear();
    }

    pub fn tx_stats(&self) -> TxStats {
        self.state().stats
    }

    pub fn stored(&self, id: &ProductId) -> Option<Product> {
        self.state().products.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.state().products.len()
    }

    pub fn service(&self) -> ProductCatalogService {
        ProductCatalogService::new(Arc::new(self.clone()), Arc::new(self.clone()))
    }
}

#[async_trait]
impl Repository<Product, ProductId> for InMemoryCatalog {
    async fn find_by_id(&self, id: &ProductId, fetch: Fetch) -> StoreResult<Option<Product>> {
        let state = self.state();
        state.check(Op::FindById)?;
        Ok(state.products.get(id).map(|p| load(p, fetch)))
    }

    async fn save(&self, product: &Product) -> StoreResult<()> {
        let mut state = self.state();
        state.check(Op::Save)?;
        state.check_unique(product)?;
        state.upsert(product);
        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> StoreResult<bool> {
        let mut state = self.state();
        state.check(Op::Delete)?;
        Ok(state.products.remove(id).is_some())
    }

    async fn exists(&self, id: &ProductId) -> StoreResult<bool> {
        Ok(self.state().products.contains_key(id))
    }
}

#[async_trait]
impl PageableRepository<Product, ProductId> for InMemoryCatalog {
    async fn find_all(&self, pagination: &Pagination, fetch: Fetch) -> StoreResult<Vec<Product>> {
        let state = self.state();
        state.check(Op::FindAll)?;
        Ok(state
            .products
            .values()
            .skip(pagination.offset as usize)
            .take(pagination.limit as usize)
            .map(|p| load(p, fetch))
            .collect())
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(self.state().products.len() as u64)
    }
}

#[async_trait]
impl ProductRepository for InMemoryCatalog {
    async fn find_by_slug(&self, slug: &str, fetch: Fetch) -> StoreResult<Option<Product>> {
        let state = self.state();
        state.check(Op::FindBySlug)?;
        Ok(state
            .products
            .values()
            .find(|p| p.slug.as_str() == slug)
            .map(|p| load(p, fetch)))
    }

    async fn delete_all(&self) -> StoreResult<u64> {
        let mut state = self.state();
        state.check(Op::DeleteAll)?;
        let deleted = state.products.len() as u64;
        state.products.clear();
        Ok(deleted)
    }
}

#[async_trait]
impl UnitOfWorkFactory for InMemoryCatalog {
    async fn begin(&self) -> StoreResult<Box<dyn CatalogUnitOfWork>> {
        let mut state = self.state();
        state.check(Op::Begin)?;
        state.stats.begun += 1;

        Ok(Box::new(InMemoryUnitOfWork {
            state: self.state.clone(),
            staged: Mutex::new(Vec::new()),
        }))
    }
}

enum Staged {
    DeleteImages(ProductId),
    Save(Product),
}

/// 内存工作单元，提交时按顺序应用暂存的写操作
pub struct InMemoryUnitOfWork {
    state: Arc<Mutex<CatalogState>>,
    staged: Mutex<Vec<Staged>>,
}

impl InMemoryUnitOfWork {
    fn state(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().unwrap()
    }
}

#[async_trait]
impl ProductWriteRepository for InMemoryUnitOfWork {
    async fn save(&self, product: &Product) -> StoreResult<()> {
        {
            let state = self.state();
            state.check(Op::TxSave)?;
            state.check_unique(product)?;
        }
        self.staged.lock().unwrap().push(Staged::Save(product.clone()));
        Ok(())
    }
}

#[async_trait]
impl ProductImageRepository for InMemoryUnitOfWork {
    async fn delete_by_product(&self, product_id: &ProductId) -> StoreResult<u64> {
        let deleted = {
            let state = self.state();
            state.check(Op::TxDeleteImages)?;
            state
                .products
                .get(product_id)
                .map(|p| p.images.len() as u64)
                .unwrap_or(0)
        };
        self.staged
            .lock()
            .unwrap()
            .push(Staged::DeleteImages(*product_id));
        Ok(deleted)
    }
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    async fn commit(self: Box<Self>) -> StoreResult<()> {
        let staged = std::mem::take(&mut *self.staged.lock().unwrap());
        let mut state = self.state();
        state.check(Op::Commit)?;
        state.stats.committed += 1;

        for op in staged {
            match op {
                Staged::DeleteImages(id) => {
                    state.delete_images(&id);
                }
                Staged::Save(product) => state.upsert(&product),
            }
        }
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> StoreResult<()> {
        self.staged.lock().unwrap().clear();
        self.state().stats.rolled_back += 1;
        Ok(())
    }
}

impl CatalogUnitOfWork for InMemoryUnitOfWork {
    fn products(&self) -> &dyn ProductWriteRepository {
        self
    }

    fn product_images(&self) -> &dyn ProductImageRepository {
        self
    }
}

impl Drop for InMemoryUnitOfWork {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            state.stats.released += 1;
        }
    }
}
