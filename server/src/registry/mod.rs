//! 顧客レジストリ
//!
//! 顧客レコードをメモリ内で管理する。永続化はしない。

use customer_registry_common::{
    error::{RegistryError, RegistryResult},
    types::{seed_customers, Customer, CustomerId},
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// 顧客レジストリ
///
/// IDをキーとする順序付きマップで保持するため、一覧はID昇順で
/// 削除を挟んでも順序が変わらない。更新系の操作は書き込みロックを
/// 取ったまま存在確認と変更を行う。
#[derive(Clone)]
pub struct CustomerRegistry {
    customers: Arc<RwLock<BTreeMap<CustomerId, Customer>>>,
}

impl CustomerRegistry {
    /// 空のレジストリを作成
    pub fn new() -> Self {
        Self {
            customers: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// 初期レコード投入済みのレジストリを作成
    pub fn with_seed() -> Self {
        let customers = seed_customers()
            .into_iter()
            .map(|customer| (customer.id, customer))
            .collect();
        Self {
            customers: Arc::new(RwLock::new(customers)),
        }
    }

    /// 全顧客を取得（ID昇順）
    pub async fn list(&self) -> Vec<Customer> {
        let customers = self.customers.read().await;
        customers.values().cloned().collect()
    }

    /// 顧客を取得
    pub async fn get(&self, id: CustomerId) -> RegistryResult<Customer> {
        let customers = self.customers.read().await;
        customers
            .get(&id)
            .cloned()
            .ok_or(RegistryError::NotFound(id))
    }

    /// 顧客を登録
    ///
    /// IDが使用中なら`Conflict`を返し、何も変更しない。
    pub async fn create(&self, customer: Customer) -> RegistryResult<Customer> {
        let mut customers = self.customers.write().await;
        if customers.contains_key(&customer.id) {
            return Err(RegistryError::Conflict(customer.id));
        }
        customers.insert(customer.id, customer.clone());
        Ok(customer)
    }

    /// 顧客を丸ごと置き換える
    ///
    /// ペイロード側の`Id`は無視し、`id`で上書きする。
    pub async fn update(&self, id: CustomerId, payload: Customer) -> RegistryResult<Customer> {
        let mut customers = self.customers.write().await;
        let entry = customers.get_mut(&id).ok_or(RegistryError::NotFound(id))?;
        *entry = payload.with_id(id);
        Ok(entry.clone())
    }

    /// 顧客を削除し、残りの一覧を返す
    pub async fn delete(&self, id: CustomerId) -> RegistryResult<Vec<Customer>> {
        let mut customers = self.customers.write().await;
        customers.remove(&id).ok_or(RegistryError::NotFound(id))?;
        Ok(customers.values().cloned().collect())
    }

    /// 登録件数
    pub async fn len(&self) -> usize {
        self.customers.read().await.len()
    }

    /// 空かどうか
    pub async fn is_empty(&self) -> bool {
        self.customers.read().await.is_empty()
    }
}

impl Default for CustomerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
