//! Seeded demo data and the simulated save path for employees.

use contracts::domain::a003_employee::aggregate::{Employee, EmployeeDto, EmployeeId, EmployeeStatus};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::enums::department::Department;
use gloo_timers::future::TimeoutFuture;

const SAVE_DELAY_MS: u32 = 600;

#[allow(clippy::too_many_arguments)]
fn seeded(
    now: chrono::DateTime<chrono::Utc>,
    days_back: i64,
    code: &str,
    name: &str,
    status: EmployeeStatus,
    department: Department,
    designation: &str,
    join_date: (i32, u32, u32),
    email: &str,
) -> Employee {
    let base = BaseAggregate::with_metadata(
        EmployeeId::new_v4(),
        code.to_string(),
        name.to_string(),
        None,
        EntityMetadata::seeded_days_back(now, days_back),
    );
    Employee {
        base,
        status,
        department,
        designation: designation.to_string(),
        join_date: chrono::NaiveDate::from_ymd_opt(join_date.0, join_date.1, join_date.2),
        email: email.to_string(),
    }
}

pub fn seed_employees() -> Vec<Employee> {
    let now = chrono::Utc::now();

    vec![
        seeded(
            now, 4, "EMP-0042", "Ananya Sharma", EmployeeStatus::Active,
            Department::Engineering, "Senior Design Engineer", (2021, 4, 12),
            "ananya.sharma@b3.example",
        ),
        seeded(
            now, 9, "EMP-0041", "Rahul Verma", EmployeeStatus::Active,
            Department::Sales, "Account Manager", (2022, 8, 1),
            "rahul.verma@b3.example",
        ),
        seeded(
            now, 18, "EMP-0039", "Meera Pillai", EmployeeStatus::OnLeave,
            Department::Finance, "Payroll Specialist", (2019, 11, 25),
            "meera.pillai@b3.example",
        ),
        seeded(
            now, 33, "EMP-0036", "Karan Singh", EmployeeStatus::Active,
            Department::Operations, "Shift Supervisor", (2020, 2, 17),
            "karan.singh@b3.example",
        ),
        seeded(
            now, 52, "EMP-0031", "Divya Menon", EmployeeStatus::Active,
            Department::HumanResources, "HR Generalist", (2023, 6, 5),
            "divya.menon@b3.example",
        ),
        seeded(
            now, 100, "EMP-0024", "Suresh Patil", EmployeeStatus::Resigned,
            Department::Marketing, "Content Lead", (2018, 9, 10),
            "suresh.patil@b3.example",
        ),
    ]
}

/// Simulated save: waits like a request would, then drops the payload.
pub async fn save_form(_dto: &EmployeeDto) -> Result<(), String> {
    TimeoutFuture::new(SAVE_DELAY_MS).await;
    Ok(())
}
