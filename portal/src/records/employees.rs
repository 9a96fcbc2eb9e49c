//! Employee directory

use chrono::NaiveDate;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Employee, EmployeeInput, EmployeeStatus};
use shared::types::RecordId;

use super::IdSequence;
use crate::utils::validation::validate_required_fields;

fn not_found(id: RecordId) -> AppError {
    AppError::new(ErrorCode::EmployeeNotFound).with_detail("id", id)
}

fn validate(input: &EmployeeInput) -> AppResult<()> {
    validate_required_fields(&[
        ("name", input.name.as_str()),
        ("email", input.email.as_str()),
        ("department", input.department.as_str()),
    ])
}

#[derive(Debug, Clone)]
pub struct EmployeeDirectory {
    employees: Vec<Employee>,
    ids: IdSequence,
}

impl EmployeeDirectory {
    pub fn new(employees: Vec<Employee>) -> Self {
        let ids = IdSequence::after(employees.iter().map(|e| e.id));
        Self { employees, ids }
    }

    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    pub fn get(&self, id: RecordId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Case-insensitive match on name, email or department
    pub fn search(&self, query: &str) -> Vec<&Employee> {
        let q = query.trim().to_lowercase();
        self.employees
            .iter()
            .filter(|e| {
                q.is_empty()
                    || e.name.to_lowercase().contains(&q)
                    || e.email.to_lowercase().contains(&q)
                    || e.department.to_lowercase().contains(&q)
            })
            .collect()
    }

    pub fn add(&mut self, input: EmployeeInput, today: NaiveDate) -> AppResult<Employee> {
        validate(&input)?;

        let employee = Employee {
            id: self.ids.next_id(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            department: input.department,
            position: input.position,
            status: EmployeeStatus::Active,
            join_date: today,
            location: input.location,
            benefits: input.benefits,
            amount: input.amount,
            attachment: input.attachment,
        };
        tracing::info!(employee_id = employee.id, name = %employee.name, "Employee added");
        self.employees.push(employee.clone());
        Ok(employee)
    }

    /// Replace the editable fields; the attachment is kept unless a new one is given.
    pub fn update(&mut self, id: RecordId, input: EmployeeInput) -> AppResult<Employee> {
        validate(&input)?;

        let employee = self
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| not_found(id))?;

        employee.name = input.name;
        employee.email = input.email;
        employee.phone = input.phone;
        employee.department = input.department;
        employee.position = input.position;
        employee.location = input.location;
        employee.benefits = input.benefits;
        employee.amount = input.amount;
        if input.attachment.is_some() {
            employee.attachment = input.attachment;
        }

        tracing::info!(employee_id = id, "Employee updated");
        Ok(employee.clone())
    }

    pub fn delete(&mut self, id: RecordId) -> AppResult<Employee> {
        let pos = self
            .employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| not_found(id))?;
        let removed = self.employees.remove(pos);
        tracing::info!(employee_id = id, name = %removed.name, "Employee deleted");
        Ok(removed)
    }

    /// Prefill for the edit dialog
    pub fn edit_form(&self, id: RecordId) -> AppResult<EmployeeInput> {
        let e = self.get(id).ok_or_else(|| not_found(id))?;
        Ok(EmployeeInput {
            name: e.name.clone(),
            email: e.email.clone(),
            phone: e.phone.clone(),
            department: e.department.clone(),
            position: e.position.clone(),
            location: e.location.clone(),
            benefits: e.benefits.clone(),
            amount: e.amount.clone(),
            attachment: None,
        })
    }
}
