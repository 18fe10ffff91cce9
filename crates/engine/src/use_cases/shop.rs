//! Shop price list.

use std::sync::Arc;

use charforge_domain::ShopItem;

use crate::infrastructure::ports::{ReferenceDataPort, RepoError};

pub struct ShopUseCases {
    source: Arc<dyn ReferenceDataPort>,
}

impl ShopUseCases {
    pub fn new(source: Arc<dyn ReferenceDataPort>) -> Self {
        Self { source }
    }

    /// Every shop item, in the order the source lists them.
    pub async fn list(&self) -> Result<Vec<ShopItem>, RepoError> {
        let items = self.source.shop_items().await?;
        Ok(items.into_iter().map(ShopItem::from).collect())
    }
}
