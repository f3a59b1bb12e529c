//! Shared operations of the name-addressed zone collections.

use crate::DnsmeClient;
use dnsme_core::{ApiPayload, DomainList, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

/// A collection of zones addressed as `/<collection>/{name}`
pub(crate) struct ZoneEndpoint<'a, T> {
    client: &'a DnsmeClient,
    collection: &'static str,
    _resource: PhantomData<T>,
}

impl<'a, T> ZoneEndpoint<'a, T>
where
    T: ApiPayload + Serialize + DeserializeOwned,
{
    pub(crate) const fn new(client: &'a DnsmeClient, collection: &'static str) -> Self {
        Self {
            client,
            collection,
            _resource: PhantomData,
        }
    }

    pub(crate) async fn list(&self) -> Result<DomainList> {
        self.client.get(&[self.collection, ""]).await
    }

    pub(crate) async fn get(&self, name: &str) -> Result<T> {
        self.client
            .get::<T>(&[self.collection, name])
            .await?
            .into_result()
    }

    pub(crate) async fn put(&self, name: &str, resource: &T) -> Result<T> {
        self.client
            .put::<T, T>(&[self.collection, name], resource)
            .await?
            .into_result()
    }

    pub(crate) async fn delete(&self, name: &str) -> Result<()> {
        self.client.delete(&[self.collection, name]).await
    }
}
