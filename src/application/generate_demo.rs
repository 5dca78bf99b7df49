//! Demo dataset generation
//!
//! Builds employee profiles and a non-overlapping schedule of work items from
//! a fixed catalog. Every random draw comes from one [`SeededRng`] in a fixed
//! order, so the same seed, start date and window always give the same data.

use crate::domain::calendar::WorkCalendar;
use crate::domain::placement::{place_without_overlap, Interval, SeededRng};
use crate::domain::work_item::{
    Absence, DependencyType, EmployeeProfile, WorkDependency, WorkItem,
};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

pub struct ProjectInfo {
    pub id: &'static str,
    pub name: &'static str,
}

pub struct DepartmentInfo {
    pub name: &'static str,
    pub roles: &'static [&'static str],
    pub employees: &'static [&'static str],
}

pub const PROJECTS: [ProjectInfo; 6] = [
    ProjectInfo { id: "P-RHEIN", name: "Project Rhein" },
    ProjectInfo { id: "P-ANDEN", name: "Project Anden" },
    ProjectInfo { id: "P-AURORA", name: "Project Aurora" },
    ProjectInfo { id: "P-ATLAS", name: "Project Atlas" },
    ProjectInfo { id: "P-DELTA", name: "Project Delta" },
    ProjectInfo { id: "P-NOVA", name: "Project Nova" },
];

pub const DEPARTMENTS: [DepartmentInfo; 5] = [
    DepartmentInfo {
        name: "Hardware",
        roles: &["Electronics Engineer", "PCB Designer", "Validation Engineer"],
        employees: &["María Rojas", "Luis Mendoza", "Ana Pardo", "Renata Blanco", "Iván Cornejo"],
    },
    DepartmentInfo {
        name: "Software",
        roles: &["Firmware Engineer", "Backend Engineer", "Frontend Engineer"],
        employees: &["Diego León", "Sofía Nieto", "Carlos Núñez", "Tomás Vera", "Elisa Cárdenas"],
    },
    DepartmentInfo {
        name: "Producción",
        roles: &["Process Engineer", "Quality Analyst", "Operations Lead"],
        employees: &["Elena Torres", "Jorge Vidal", "Valeria Solís", "Martín Cuevas", "Nadia Vega"],
    },
    DepartmentInfo {
        name: "QA",
        roles: &["QA Analyst", "Automation Engineer", "Reliability Engineer"],
        employees: &["Gabriela Soto", "Leandro Flores", "Pilar Reyes", "Sebastián Ocampo"],
    },
    DepartmentInfo {
        name: "Diseño",
        roles: &["UX Designer", "UI Designer", "Service Designer"],
        employees: &["Paula Ibáñez", "Nicolás Araya", "Milena Torres", "Raúl Pino"],
    },
];

const TASK_TOPICS: [&str; 10] = [
    "Integración módulo",
    "Refactor de flujo",
    "Plan de validación",
    "Diseño de interfaz",
    "Pruebas de carga",
    "Ajustes de arquitectura",
    "Automatización de checklist",
    "Optimización de pipeline",
    "Documentación operativa",
    "Análisis de riesgos",
];

const TASK_DESCRIPTIONS: [&str; 5] = [
    "Alineación con stakeholders y definición de entregables del sprint.",
    "Implementación incremental con foco en estabilidad y mantenibilidad.",
    "Cobertura de casos borde y definición de criterios de aceptación.",
    "Revisión cruzada entre equipos para minimizar bloqueos de dependencia.",
    "Preparación de demo ejecutiva con indicadores de avance.",
];

const ABSENCE_REASONS: [&str; 3] = ["Vacaciones", "Formación", "Permiso"];

const DEPENDENCY_TYPES: [DependencyType; 2] = [DependencyType::FS, DependencyType::SS];

/// Generated employees and their scheduled work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoData {
    pub employees: Vec<EmployeeProfile>,
    pub tasks: Vec<WorkItem>,
}

impl DemoData {
    pub fn employee(&self, employee_id: &str) -> Option<&EmployeeProfile> {
        self.employees
            .iter()
            .find(|employee| employee.employee_id == employee_id)
    }

    /// Tasks of one employee, in generation order
    pub fn tasks_of(&self, employee_id: &str) -> Vec<&WorkItem> {
        self.tasks
            .iter()
            .filter(|task| task.employee_id == employee_id)
            .collect()
    }
}

/// Generator for the demo dataset
pub struct DemoGenerator<'a> {
    calendar: &'a WorkCalendar,
    start_date: NaiveDate,
    total_days: usize,
    rng: SeededRng,
}

impl<'a> DemoGenerator<'a> {
    pub fn new(calendar: &'a WorkCalendar, start_date: NaiveDate, total_days: usize, seed: u64) -> Self {
        DemoGenerator {
            calendar,
            start_date,
            total_days,
            rng: SeededRng::new(seed),
        }
    }

    /// Generate profiles first, then every employee's tasks
    pub fn generate(mut self) -> DemoData {
        let employees = self.employee_profiles();
        let tasks: Vec<WorkItem> = employees
            .iter()
            .flat_map(|employee| self.employee_tasks(employee))
            .collect();

        tracing::info!(
            employees = employees.len(),
            tasks = tasks.len(),
            start = %self.start_date,
            days = self.total_days,
            "generated demo schedule"
        );

        DemoData { employees, tasks }
    }

    fn employee_profiles(&mut self) -> Vec<EmployeeProfile> {
        let mut output = Vec::new();

        for (department_index, department) in DEPARTMENTS.iter().enumerate() {
            let prefix: String = department.name.chars().take(2).collect::<String>().to_uppercase();

            for (employee_index, employee_name) in department.employees.iter().enumerate() {
                let weekly_capacity_hours = self.rng.int_in(34, 40) as u32;
                let absence_start = self.start_date + Duration::days(self.rng.int_in(7, 60));
                let hourly_cost = self.rng.int_in(28, 64) as u32;

                let absences = if self.rng.next() > 0.45 {
                    let end_date = absence_start + Duration::days(self.rng.int_in(1, 3));
                    vec![Absence {
                        start_date: absence_start,
                        end_date,
                        reason: self.rng.pick(&ABSENCE_REASONS).to_string(),
                    }]
                } else {
                    Vec::new()
                };

                output.push(EmployeeProfile {
                    employee_id: format!("EMP-{}-{:02}", prefix, employee_index + 1),
                    employee_name: employee_name.to_string(),
                    department: department.name.to_string(),
                    role: department.roles[(employee_index + department_index) % department.roles.len()]
                        .to_string(),
                    hourly_cost,
                    weekly_capacity_hours,
                    absences,
                });
            }
        }

        output
    }

    fn employee_tasks(&mut self, employee: &EmployeeProfile) -> Vec<WorkItem> {
        let calendar = self.calendar;
        let task_count = self.rng.int_in(4, 8) as usize;
        let mut placed: Vec<Interval> = Vec::with_capacity(task_count);
        let mut tasks = Vec::with_capacity(task_count);

        for task_index in 0..task_count {
            let project = self.rng.pick(&PROJECTS);
            let duration_days = self.rng.int_in(2, 6) as u32;
            let start = place_without_overlap(
                calendar,
                &placed,
                self.start_date,
                self.total_days,
                duration_days,
                &mut self.rng,
            );
            let span = Interval::spanning(calendar, start, duration_days);
            placed.push(span);

            let earliest_start_date =
                calendar.next_working_day(calendar.advance_working_days(start, -self.rng.int_in(0, 2)));
            let deadline_date = calendar.advance_working_days(span.end_exclusive, self.rng.int_in(1, 5));
            let title = format!("{} {}", self.rng.pick(&TASK_TOPICS), task_index + 1);
            let description = format!(
                "{} Equipo: {}.",
                self.rng.pick(&TASK_DESCRIPTIONS),
                employee.department
            );
            let dependencies = if task_index > 0 {
                vec![WorkDependency {
                    kind: *self.rng.pick(&DEPENDENCY_TYPES),
                    task_id: format!("{}-TSK-{}", employee.employee_id, task_index),
                }]
            } else {
                Vec::new()
            };

            tasks.push(WorkItem {
                id: format!("{}-TSK-{}", employee.employee_id, task_index + 1),
                project_id: project.id.to_string(),
                project_name: project.name.to_string(),
                department: employee.department.clone(),
                employee_id: employee.employee_id.clone(),
                employee_name: employee.employee_name.clone(),
                title,
                description,
                earliest_start_date,
                deadline_date,
                duration_days,
                scheduled_start_date: start,
                dependencies,
            });
        }

        tasks
    }
}
