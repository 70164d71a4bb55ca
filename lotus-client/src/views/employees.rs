//! Employee directory view

use crate::api::EmployeeService;
use crate::{dispatcher, ClientConfig, ClientResult, RecordStore};
use shared::models::{
    Department, DepartmentStatistics, Employee, EmployeeCreate, EmployeeStatistics,
    EmployeeStatus, EmployeeUpdate,
};
use shared::RecordFilter;

/// Controller for the employee list and detail pages
///
/// Text search runs over first name, last name and email; the department
/// and status dropdowns are strict AND with the search term.
pub struct EmployeeDirectory {
    service: EmployeeService,
    store: RecordStore<Employee>,
    search_term: String,
    department: Option<Department>,
    status: Option<EmployeeStatus>,
}

impl EmployeeDirectory {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::with_service(EmployeeService::new(config)?))
    }

    pub fn with_service(service: EmployeeService) -> Self {
        Self {
            service,
            store: RecordStore::new(),
            search_term: String::new(),
            department: None,
            status: None,
        }
    }

    /// Refetch the collection from the backend
    pub async fn refresh(&self) -> ClientResult<usize> {
        dispatcher::refresh(&self.store, || self.service.list()).await?;
        Ok(self.store.len().await)
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_department(&mut self, department: Option<Department>) {
        self.department = department;
    }

    pub fn set_status(&mut self, status: Option<EmployeeStatus>) {
        self.status = status;
    }

    pub fn clear_filters(&mut self) {
        self.search_term.clear();
        self.department = None;
        self.status = None;
    }

    /// Unfiltered snapshot
    pub async fn employees(&self) -> Vec<Employee> {
        self.store.snapshot().await
    }

    /// Snapshot with the active filters applied
    pub async fn filtered(&self) -> Vec<Employee> {
        let snapshot = self.store.snapshot().await;
        let filter = RecordFilter::new()
            .search(&self.search_term, |e: &Employee| {
                vec![e.first_name.as_str(), e.last_name.as_str(), e.email.as_str()]
            })
            .equals(self.department, |e: &Employee| e.department)
            .equals(self.status, |e: &Employee| e.status);
        filter.apply(&snapshot).into_iter().cloned().collect()
    }

    pub async fn create(&self, payload: &EmployeeCreate) -> ClientResult<Employee> {
        dispatcher::dispatch(&self.store, self.service.create(payload), || {
            self.service.list()
        })
        .await
    }

    pub async fn update(&self, id: i64, payload: &EmployeeUpdate) -> ClientResult<Employee> {
        dispatcher::dispatch(&self.store, self.service.update(id, payload), || {
            self.service.list()
        })
        .await
    }

    pub async fn remove(&self, id: i64) -> ClientResult<()> {
        dispatcher::dispatch(&self.store, self.service.delete(id), || {
            self.service.list()
        })
        .await
    }

    pub async fn set_employee_status(
        &self,
        id: i64,
        status: EmployeeStatus,
    ) -> ClientResult<Employee> {
        dispatcher::dispatch(&self.store, self.service.update_status(id, status), || {
            self.service.list()
        })
        .await
    }

    /// Server-computed aggregate (this subsystem's statistics policy)
    pub async fn statistics(&self) -> ClientResult<EmployeeStatistics> {
        self.service.statistics().await
    }

    pub async fn department_statistics(&self) -> ClientResult<Vec<DepartmentStatistics>> {
        self.service.department_statistics().await
    }
}
