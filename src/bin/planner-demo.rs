//! Loads a planner from a data folder, optionally logs in, and prints what the page would show.
//!
//! Usage: `planner-demo [data-folder] [carnet password]`

use std::path::Path;

use student_planner::storage::FolderStore;
use student_planner::view::{ids, Controller, MemoryPage};
use student_planner::{config, roster, Calendar, Planner};

const DEFAULT_DATA_FOLDER: &str = "planner_data";


#[tokio::main]
async fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let data_folder = args.get(0).map(|s| s.as_str()).unwrap_or(DEFAULT_DATA_FOLDER);

    let storage = match FolderStore::new(Path::new(data_folder)) {
        Ok(storage) => storage,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };
    let mut controller = Controller::new(Planner::load(storage));
    let mut page = MemoryPage::planner_page();

    let source = roster::source_for(&config::seed_roster_location());
    controller.init(source.as_ref(), &mut page).await;

    if let (Some(carnet), Some(password)) = (args.get(1), args.get(2)) {
        page.fill(ids::CARNET, carnet);
        page.fill(ids::PASSWORD, password);
        controller.submit_login(&mut page);
    }
    for alert in page.alerts() {
        println!("! {}", alert);
    }

    println!("---- courses -----");
    student_planner::utils::print_planner(controller.planner());

    println!("---- calendar -----");
    match Calendar::for_today() {
        Ok(calendar) => student_planner::utils::print_month(&calendar),
        Err(err) => log::error!("Unable to build the calendar: {}", err),
    }
}
