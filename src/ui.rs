// UI layer: a simple interactive menu using `dialoguer`. Each entry collects
// its inputs, calls one `ApiClient` method behind a spinner and prints the
// result. API errors are printed and the loop keeps going; only terminal I/O
// failures end the session.

use crate::api::ApiClient;
use crate::config::{AppCredentials, TokenStore};
use crate::error::PutioError;
use crate::models::{File, NewTransfer, StatusResponse, Transfer};
use crate::oauth;
use anyhow::Result;
use crossterm::style::Stylize;
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const MENU: &[&str] = &[
    "Login",
    "List folder",
    "Search files",
    "Create folder",
    "Rename file",
    "Move file",
    "Delete file",
    "MP4 status",
    "Convert to MP4",
    "Download link",
    "Zip files",
    "Transfers",
    "Add transfer",
    "Cancel transfer",
    "Account info",
    "Account settings",
    "Friends",
    "Waiting friend requests",
    "Send friend request",
    "Deny friend request",
    "Logout",
    "Exit",
];

/// Main interactive menu. Runs a select loop until the user chooses "Exit".
/// `store` receives the token after a successful login.
pub fn main_menu(mut api: ApiClient, store: TokenStore) -> Result<()> {
    loop {
        let selection = Select::new()
            .with_prompt("put.io")
            .items(MENU)
            .default(0)
            .interact()?;
        let choice = MENU[selection];

        match choice {
            "Exit" => break,
            "Login" => {
                if let Some(token) = handle_login(&api)? {
                    api = api.with_token(token.as_str());
                    store.save(&token)?;
                    println!("{}", "Logged in.".green());
                }
                continue;
            }
            "Logout" => {
                store.clear()?;
                api = api.with_token("");
                println!("Token removed from {}", store.path().display());
                continue;
            }
            _ => {}
        }

        if !api.has_token() {
            println!("{}", "You should login first.".yellow());
            continue;
        }

        match choice {
            "List folder" => handle_list(&api)?,
            "Search files" => handle_search(&api)?,
            "Create folder" => {
                let name: String = Input::new().with_prompt("Folder name").interact_text()?;
                let parent = prompt_id("Parent folder id", Some(0))?;
                if let Some(resp) = run("Creating folder...", || api.create_folder(&name, parent)) {
                    match resp.file {
                        Some(file) => print_file(&file),
                        None => print_status(&StatusResponse { status: resp.status, extra: resp.extra }),
                    }
                }
            }
            "Rename file" => {
                let id = prompt_id("File id", None)?;
                let name: String = Input::new().with_prompt("New name").interact_text()?;
                if let Some(resp) = run("Renaming...", || api.rename_file(id, &name)) {
                    print_status(&resp);
                }
            }
            "Move file" => {
                let id = prompt_id("File id", None)?;
                let parent = prompt_id("New parent folder id", Some(0))?;
                if let Some(resp) = run("Moving...", || api.move_file(id, parent)) {
                    print_status(&resp);
                }
            }
            "Delete file" => {
                let id = prompt_id("File id", None)?;
                let sure = Confirm::new()
                    .with_prompt(format!("Delete file {id}?"))
                    .default(false)
                    .interact()?;
                if sure {
                    if let Some(resp) = run("Deleting...", || api.delete_file(id)) {
                        print_status(&resp);
                    }
                }
            }
            "MP4 status" => {
                let id = prompt_id("File id", None)?;
                if let Some(resp) = run("Checking MP4...", || api.get_mp4_status(id)) {
                    match resp.mp4 {
                        Some(mp4) => {
                            println!("{} {}", "status:".bold(), mp4.status);
                            if let Some(done) = mp4.percent_done {
                                println!("{} {done}%", "progress:".bold());
                            }
                            if let Some(size) = mp4.size {
                                println!("{} {}", "size:".bold(), human_size(size));
                            }
                            if let Some(url) = mp4.stream_url {
                                println!("{} {url}", "stream:".bold());
                            }
                            if let Some(url) = mp4.download_url {
                                println!("{} {url}", "download:".bold());
                            }
                        }
                        None => print_status(&StatusResponse { status: resp.status, extra: resp.extra }),
                    }
                }
            }
            "Convert to MP4" => {
                let id = prompt_id("File id", None)?;
                if let Some(resp) = run("Requesting conversion...", || api.convert_to_mp4(id)) {
                    print_status(&resp);
                }
            }
            "Download link" => {
                let id = prompt_id("File id", None)?;
                if let Some(url) = run("Resolving download...", || api.download_url(id)) {
                    println!("{url}");
                }
            }
            "Zip files" => {
                let raw: String = Input::new()
                    .with_prompt("File ids (comma separated)")
                    .interact_text()?;
                match parse_ids(&raw) {
                    Some(ids) => {
                        if let Some(resp) = run("Requesting zip...", || api.create_zip(&ids)) {
                            match resp.zip_id {
                                Some(zip_id) => println!("{} {zip_id}", "zip id:".bold()),
                                None => print_status(&StatusResponse { status: resp.status, extra: resp.extra }),
                            }
                        }
                    }
                    None => println!("{}", "Ids must be numbers separated by commas.".yellow()),
                }
            }
            "Transfers" => {
                if let Some(resp) = run("Loading transfers...", || api.list_transfers()) {
                    if resp.transfers.is_empty() {
                        println!("No transfers.");
                    }
                    resp.transfers.iter().for_each(print_transfer);
                }
            }
            "Add transfer" => {
                let url: String = Input::new().with_prompt("URL or magnet link").interact_text()?;
                let save_parent_id = prompt_id("Save into folder id", Some(0))?;
                let extract = Confirm::new()
                    .with_prompt("Extract archives?")
                    .default(false)
                    .interact()?;
                let transfer = NewTransfer {
                    save_parent_id,
                    extract,
                    ..NewTransfer::new(url)
                };
                if let Some(resp) = run("Adding transfer...", || api.add_transfer(&transfer)) {
                    match resp.transfer {
                        Some(t) => print_transfer(&t),
                        None => print_status(&StatusResponse { status: resp.status, extra: resp.extra }),
                    }
                }
            }
            "Cancel transfer" => {
                let id = prompt_id("Transfer id", None)?;
                if let Some(resp) = run("Cancelling...", || api.cancel_transfer(id)) {
                    print_status(&resp);
                }
            }
            "Account info" => {
                if let Some(resp) = run("Loading account...", || api.account_info()) {
                    match resp.info {
                        Some(info) => {
                            println!("{} {}", "user:".bold(), info.username);
                            if let Some(mail) = info.mail {
                                println!("{} {mail}", "mail:".bold());
                            }
                            println!(
                                "{} {} used of {} ({} free)",
                                "disk:".bold(),
                                human_size(info.disk.used),
                                human_size(info.disk.size),
                                human_size(info.disk.avail)
                            );
                            if let Some(date) = info.plan_expiration_date {
                                println!("{} {date}", "plan expires:".bold());
                            }
                        }
                        None => print_status(&StatusResponse { status: resp.status, extra: resp.extra }),
                    }
                }
            }
            "Account settings" => {
                if let Some(resp) = run("Loading settings...", || api.account_settings()) {
                    match resp.settings {
                        Some(s) => {
                            if let Some(folder) = s.default_download_folder {
                                println!("{} {folder}", "download folder:".bold());
                            }
                            println!("{} {}", "invisible:".bold(), s.is_invisible);
                            println!("{} {}", "extract by default:".bold(), s.extraction_default);
                            println!("{} {}", "subtitles:".bold(), s.subtitle_languages.join(", "));
                        }
                        None => print_status(&StatusResponse { status: resp.status, extra: resp.extra }),
                    }
                }
            }
            "Friends" => {
                if let Some(resp) = run("Loading friends...", || api.list_friends()) {
                    print_names(&resp.friends.iter().map(|f| f.name.as_str()).collect::<Vec<_>>());
                }
            }
            "Waiting friend requests" => {
                if let Some(resp) = run("Loading requests...", || api.waiting_friend_requests()) {
                    print_names(&resp.friends.iter().map(|f| f.name.as_str()).collect::<Vec<_>>());
                }
            }
            "Send friend request" => {
                let user: String = Input::new().with_prompt("Username").interact_text()?;
                if let Some(resp) = run("Sending request...", || api.send_friend_request(&user)) {
                    print_status(&resp);
                }
            }
            "Deny friend request" => {
                let user: String = Input::new().with_prompt("Username").interact_text()?;
                if let Some(resp) = run("Denying request...", || api.deny_friend_request(&user)) {
                    print_status(&resp);
                }
            }
            _ => {}
        }
    }
    Ok(())
}

/// Walk the user through the OAuth code flow, returning the new token.
fn handle_login(api: &ApiClient) -> Result<Option<String>> {
    let app = match AppCredentials::from_env() {
        Ok(app) => app,
        Err(e) => {
            println!("{} {e:#}", "Cannot login:".red());
            return Ok(None);
        }
    };
    let config = api.config();
    let url = oauth::authorize_url(&config.base_url, &app)?;
    println!("Open this page and approve access:\n  {}", url.as_str().cyan());
    let code: String = Input::new().with_prompt("Authorization code").interact_text()?;

    Ok(run("Logging in...", || oauth::exchange_code(&config, &app, code.trim())))
}

fn handle_list(api: &ApiClient) -> Result<()> {
    let parent = prompt_id("Folder id", Some(0))?;
    if let Some(list) = run("Loading files...", || api.list_files(Some(parent))) {
        if let Some(parent) = &list.parent {
            println!("{}", parent.name.as_str().bold());
        }
        if list.files.is_empty() {
            println!("(empty)");
        }
        list.files.iter().for_each(print_file);
    }
    Ok(())
}

fn handle_search(api: &ApiClient) -> Result<()> {
    let query: String = Input::new().with_prompt("Search").interact_text()?;
    let mut page = 1;
    loop {
        let Some(result) = run("Searching...", || api.search_files(&query, page)) else {
            return Ok(());
        };
        result.files.iter().for_each(print_file);
        let more = result.next.is_some()
            && Confirm::new()
                .with_prompt("Show next page?")
                .default(true)
                .interact()?;
        if !more {
            return Ok(());
        }
        page += 1;
    }
}

fn prompt_id(prompt: &str, default: Option<i64>) -> Result<i64> {
    let mut input = Input::<i64>::new();
    input.with_prompt(prompt);
    if let Some(default) = default {
        input.default(default);
    }
    Ok(input.interact_text()?)
}

/// Run `call` behind a spinner. Errors are printed and mapped to `None`.
fn run<T>(message: &'static str, call: impl FnOnce() -> crate::error::Result<T>) -> Option<T> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = call();
    spinner.finish_and_clear();

    match result {
        Ok(value) => Some(value),
        Err(e) => {
            report(&e);
            None
        }
    }
}

fn report(err: &PutioError) {
    println!("{} {err}", "Request failed:".red());
    if let Some(body) = err.body() {
        if !body.is_empty() {
            println!("{}", body.dim());
        }
    }
}

fn print_status(resp: &StatusResponse) {
    let status = resp.status.as_deref().unwrap_or("(no status)");
    if resp.is_ok() {
        println!("{}", status.green());
    } else {
        println!("{}", status.red());
        if let Some(message) = resp.extra.get("error_message").and_then(|v| v.as_str()) {
            println!("{message}");
        }
    }
}

fn print_file(file: &File) {
    let name = if file.is_folder() {
        format!("{}/", file.name).blue().to_string()
    } else {
        file.name.clone()
    };
    println!("{:>12}  {:>10}  {name}", file.id, human_size(file.size));
}

fn print_transfer(t: &Transfer) {
    let name = t.name.as_deref().or(t.source.as_deref()).unwrap_or("?");
    let status = t.status.as_deref().unwrap_or("?");
    println!(
        "{:>10}  {:<12} {:>3}%  {}",
        t.id,
        status,
        t.percent_done.unwrap_or(0),
        name
    );
    if let Some(err) = &t.error_message {
        println!("            {}", err.as_str().red());
    }
}

fn print_names(names: &[&str]) {
    if names.is_empty() {
        println!("Nobody here.");
    }
    for name in names {
        println!("{name}");
    }
}

fn parse_ids(raw: &str) -> Option<Vec<i64>> {
    let ids: Option<Vec<i64>> = raw
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().ok())
        .collect();
    ids.filter(|ids| !ids.is_empty())
}

fn human_size(bytes: i64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{size:.1} {}", UNITS[unit])
    }
}
