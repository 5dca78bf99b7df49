//! Department → employee → tasks partition used for timeline rows

use crate::domain::work_item::WorkItem;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeGroup<'a> {
    pub employee_id: &'a str,
    pub employee_name: &'a str,
    /// Sorted by scheduled start
    pub tasks: Vec<&'a WorkItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentGroup<'a> {
    pub department: &'a str,
    pub employees: Vec<EmployeeGroup<'a>>,
}

/// Bucket tasks by department, then by employee.
///
/// Departments and employees keep the order in which they first appear.
/// Each employee's tasks are stably sorted by scheduled start date.
pub fn group_by_department_and_employee(tasks: &[WorkItem]) -> Vec<DepartmentGroup<'_>> {
    let mut departments: Vec<DepartmentGroup<'_>> = Vec::new();

    for task in tasks {
        let department_index = match departments
            .iter()
            .position(|group| group.department == task.department)
        {
            Some(index) => index,
            None => {
                departments.push(DepartmentGroup {
                    department: &task.department,
                    employees: Vec::new(),
                });
                departments.len() - 1
            }
        };

        let employees = &mut departments[department_index].employees;
        match employees
            .iter_mut()
            .find(|group| group.employee_id == task.employee_id)
        {
            Some(group) => group.tasks.push(task),
            None => employees.push(EmployeeGroup {
                employee_id: &task.employee_id,
                employee_name: &task.employee_name,
                tasks: vec![task],
            }),
        }
    }

    for department in &mut departments {
        for employee in &mut department.employees {
            employee.tasks.sort_by_key(|task| task.scheduled_start_date);
        }
    }

    departments
}
