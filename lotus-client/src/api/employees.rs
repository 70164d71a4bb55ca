//! Employee service client (`/api/employees`)

use crate::{ClientConfig, ClientResult, HttpClient, NetworkHttpClient};
use shared::models::{
    Department, DepartmentStatistics, Employee, EmployeeCreate, EmployeeStatistics,
    EmployeeStatus, EmployeeUpdate,
};
use validator::Validate;

#[derive(Debug, Clone)]
pub struct EmployeeService {
    http: NetworkHttpClient,
}

impl EmployeeService {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http: NetworkHttpClient::new(config)?,
        })
    }

    pub fn with_http(http: NetworkHttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ClientResult<Vec<Employee>> {
        self.http.get("api/employees").await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Employee> {
        self.http.get(&format!("api/employees/{id}")).await
    }

    pub async fn create(&self, payload: &EmployeeCreate) -> ClientResult<Employee> {
        payload.validate()?;
        self.http.post("api/employees", payload).await
    }

    pub async fn update(&self, id: i64, payload: &EmployeeUpdate) -> ClientResult<Employee> {
        payload.validate()?;
        self.http.put(&format!("api/employees/{id}"), payload).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("api/employees/{id}")).await
    }

    /// Status rides in the query string on this service
    pub async fn update_status(&self, id: i64, status: EmployeeStatus) -> ClientResult<Employee> {
        self.http
            .patch_empty(&format!("api/employees/{id}/status?status={status}"))
            .await
    }

    pub async fn search(&self, name: &str) -> ClientResult<Vec<Employee>> {
        self.http
            .get(&format!(
                "api/employees/search?name={}",
                urlencoding::encode(name)
            ))
            .await
    }

    pub async fn by_department(&self, department: Department) -> ClientResult<Vec<Employee>> {
        self.http
            .get(&format!("api/employees/department/{department}"))
            .await
    }

    pub async fn by_status(&self, status: EmployeeStatus) -> ClientResult<Vec<Employee>> {
        self.http
            .get(&format!("api/employees/status/{status}"))
            .await
    }

    pub async fn by_position(&self, position: &str) -> ClientResult<Vec<Employee>> {
        self.http
            .get(&format!(
                "api/employees/position/{}",
                urlencoding::encode(position)
            ))
            .await
    }

    /// Server-computed aggregate (this subsystem's statistics policy)
    pub async fn statistics(&self) -> ClientResult<EmployeeStatistics> {
        self.http.get("api/employees/statistics").await
    }

    pub async fn department_statistics(&self) -> ClientResult<Vec<DepartmentStatistics>> {
        self.http.get("api/employees/statistics/departments").await
    }

    pub async fn count(&self) -> ClientResult<i64> {
        self.http.get("api/employees/count").await
    }

    pub async fn active_count(&self) -> ClientResult<i64> {
        self.http.get("api/employees/count/active").await
    }
}
