//! Cached facade over [`RosterClient`].
//!
//! Reads go through the tag-invalidated [`QueryCache`]; writes run against
//! the API and then drop exactly the cached reads their mutation declares.

use crate::api::{Employee, EmployeeList, EmployeeUpdate, ListParams, NewEmployee, RosterClient};
use crate::cache::{Mutation, QueryCache, QueryKey, Tag};
use crate::error::ClientResult;

pub struct RosterStore {
    client: RosterClient,
    cache: QueryCache,
}

impl RosterStore {
    pub fn new(client: RosterClient) -> Self {
        Self {
            client,
            cache: QueryCache::new(),
        }
    }

    pub fn client(&self) -> &RosterClient {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut RosterClient {
        &mut self.client
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Fetch one listing page, served from cache when the same parameters
    /// were fetched before.
    pub async fn employees(&mut self, params: &ListParams) -> ClientResult<EmployeeList> {
        let key = QueryKey::new("list_employees", params)?;
        if let Some(cached) = self.cache.get(&key) {
            return Ok(serde_json::from_value(cached.clone())?);
        }

        let data = self.client.list_employees(params).await?;
        self.cache
            .insert(key, serde_json::to_value(&data)?, vec![Tag::EmployeeList]);
        Ok(data)
    }

    /// Fetch a single employee through the cache.
    pub async fn employee(&mut self, id: i64) -> ClientResult<Option<Employee>> {
        let key = QueryKey::new("get_employee", &id)?;
        if let Some(cached) = self.cache.get(&key) {
            return Ok(serde_json::from_value(cached.clone())?);
        }

        let data = self.client.get_employee(id).await?;
        self.cache
            .insert(key, serde_json::to_value(&data)?, vec![Tag::Employee(id)]);
        Ok(data)
    }

    /// Fetch the distinct classes through the cache.
    pub async fn classes(&mut self) -> ClientResult<Vec<String>> {
        let key = QueryKey::new("unique_classes", &())?;
        if let Some(cached) = self.cache.get(&key) {
            return Ok(serde_json::from_value(cached.clone())?);
        }

        let data = self.client.unique_classes().await?;
        self.cache
            .insert(key, serde_json::to_value(&data)?, vec![Tag::ClassList]);
        Ok(data)
    }

    pub async fn add_employee(&mut self, employee: &NewEmployee) -> ClientResult<Employee> {
        let created = self.client.add_employee(employee).await?;
        self.cache.invalidate(&Mutation::AddEmployee.invalidates());
        Ok(created)
    }

    pub async fn update_employee(
        &mut self,
        id: i64,
        update: &EmployeeUpdate,
    ) -> ClientResult<Employee> {
        let updated = self.client.update_employee(id, update).await?;
        self.cache
            .invalidate(&Mutation::UpdateEmployee(id).invalidates());
        Ok(updated)
    }

    pub async fn delete_employee(&mut self, id: i64) -> ClientResult<String> {
        let confirmation = self.client.delete_employee(id).await?;
        self.cache
            .invalidate(&Mutation::DeleteEmployee(id).invalidates());
        Ok(confirmation)
    }
}
