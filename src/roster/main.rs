use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use roster::api::{CmdMessage, EmployeeDraft, EmployeeUpdate, MessageLevel, RosterApi};
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::logging;
use roster::model::Employee;
use roster::store::fs::FileStore;
use std::io::{self, Write};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let mut api = init_context(&cli)?;

    loop {
        println!();
        println!("Employee Management System");
        println!("1. Add Employee");
        println!("2. View Employees");
        println!("3. Update Employee");
        println!("4. Delete Employee");
        println!("5. Search Employee");
        println!("6. Exit");

        let Some(choice) = prompt("Choose option (1-6): ")? else {
            break;
        };
        match choice.trim() {
            "1" => handle_add(&mut api)?,
            "2" => handle_view(&api)?,
            "3" => handle_update(&mut api)?,
            "4" => handle_delete(&mut api)?,
            "5" => handle_search(&api)?,
            "6" => {
                println!("Program ended.");
                break;
            }
            _ => println!("Invalid choice."),
        }
    }
    Ok(())
}

fn init_context(cli: &Cli) -> Result<RosterApi<FileStore>> {
    let data_path = match &cli.file {
        Some(path) => path.clone(),
        None => {
            let config = ProjectDirs::from("com", "roster", "roster")
                .map(|dirs| RosterConfig::load(dirs.config_dir()).unwrap_or_default())
                .unwrap_or_default();
            PathBuf::from(config.data_file)
        }
    };

    let store = FileStore::open(data_path)?;
    Ok(RosterApi::new(store))
}

fn handle_add(api: &mut RosterApi<FileStore>) -> Result<()> {
    let Some(id) = prompt("Enter Employee ID: ")? else {
        return Ok(());
    };
    let Some(name) = prompt("Enter Name: ")? else {
        return Ok(());
    };
    let Some(position) = prompt("Enter Position: ")? else {
        return Ok(());
    };
    let Some(salary) = prompt("Enter Salary: ")? else {
        return Ok(());
    };
    let Some(email) = prompt("Enter Email: ")? else {
        return Ok(());
    };

    let draft = EmployeeDraft {
        id,
        name,
        position,
        salary,
        email,
    };
    match api.add_employee(draft) {
        Ok(result) => print_messages(&result.messages),
        Err(e) => print_error(&e),
    }
    Ok(())
}

fn handle_view(api: &RosterApi<FileStore>) -> Result<()> {
    let result = api.list_employees()?;
    print_employees(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(api: &mut RosterApi<FileStore>) -> Result<()> {
    let Some(id) = prompt("Enter Employee ID to update: ")? else {
        return Ok(());
    };

    // Look the record up before prompting for fields, so a typo'd ID fails
    // fast instead of after four prompts.
    if api.search_employee(&id)?.listed.is_empty() {
        print_error(&RosterError::NotFound(id));
        return Ok(());
    }

    println!("Press Enter to keep old value.");
    let Some(name) = prompt("New Name: ")? else {
        return Ok(());
    };
    let Some(position) = prompt("New Position: ")? else {
        return Ok(());
    };
    let Some(salary) = prompt("New Salary: ")? else {
        return Ok(());
    };
    let Some(email) = prompt("New Email: ")? else {
        return Ok(());
    };

    let mut update = EmployeeUpdate::new(id);
    update.name = (!name.is_empty()).then_some(name);
    update.position = (!position.is_empty()).then_some(position);
    update.salary = (!salary.is_empty()).then_some(salary);
    update.email = (!email.is_empty()).then_some(email);

    match api.update_employee(&update) {
        Ok(result) => print_messages(&result.messages),
        Err(e) => print_error(&e),
    }
    Ok(())
}

fn handle_delete(api: &mut RosterApi<FileStore>) -> Result<()> {
    let Some(id) = prompt("Enter Employee ID to delete: ")? else {
        return Ok(());
    };
    match api.delete_employee(&id) {
        Ok(result) => print_messages(&result.messages),
        Err(e) => print_error(&e),
    }
    Ok(())
}

fn handle_search(api: &RosterApi<FileStore>) -> Result<()> {
    let Some(id) = prompt("Enter Employee ID to search: ")? else {
        return Ok(());
    };
    let result = api.search_employee(&id)?;
    for employee in &result.listed {
        print_employee_detail(employee);
    }
    print_messages(&result.messages);
    Ok(())
}

fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end().to_string()))
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_error(e: &RosterError) {
    println!("{}", e.to_string().red());
}

fn print_employee_detail(employee: &Employee) {
    println!("----------------------------");
    println!("ID: {}", employee.id.bold());
    println!("Name: {}", employee.name);
    println!("Position: {}", employee.position);
    println!("Salary: {}", employee.salary);
    println!("Email: {}", employee.email);
}

const COLUMN_GAP: &str = "  ";

fn print_employees(employees: &[Employee]) {
    if employees.is_empty() {
        return;
    }

    let headers = ["ID", "Name", "Position", "Salary", "Email"];
    let rows: Vec<[String; 5]> = employees
        .iter()
        .map(|e| {
            [
                e.id.clone(),
                e.name.clone(),
                e.position.clone(),
                e.salary.to_string(),
                e.email.clone(),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = headers.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let header_line = headers
        .iter()
        .zip(widths)
        .map(|(h, w)| pad_to_width(h, w))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    println!("{}", header_line.dimmed());

    for row in &rows {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, w)| pad_to_width(cell, w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        println!("{}", line);
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}
