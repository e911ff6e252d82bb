use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use unisocial_core::scenario::{Scenario, ScenarioCatalog};
use unisocial_core::session::{ConversationService, SessionController};
use unisocial_core::transcript::Message;
use unisocial_infrastructure::{ConfigService, SecretServiceImpl};
use unisocial_interaction::{OfflineService, RemoteConversationService, RolePlayService};

use super::helper::SessionHelper;
use super::report::print_report;
use crate::Backend;

pub struct PlayOptions {
    pub scenario_id: String,
    pub backend: Backend,
    /// Overrides the address derived from `server.bind`
    pub server_url: Option<String>,
    pub config: Option<PathBuf>,
}

/// One line typed during a session.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionInput<'a> {
    Empty,
    Say(&'a str),
    End,
    Retry,
    Quit,
    Unknown(&'a str),
}

/// URL for reaching a server that listens on `bind`.
///
/// A wildcard bind address is reached through loopback.
pub fn server_url_for_bind(bind: &str) -> String {
    match bind.parse::<SocketAddr>() {
        Ok(mut addr) => {
            if addr.ip().is_unspecified() {
                let loopback = match addr.ip() {
                    IpAddr::V4(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
                    IpAddr::V6(_) => IpAddr::V6(Ipv6Addr::LOCALHOST),
                };
                addr.set_ip(loopback);
            }
            format!("http://{addr}")
        }
        Err(_) => format!("http://{bind}"),
    }
}

impl<'a> SessionInput<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        match line {
            "" => Self::Empty,
            "/end" => Self::End,
            "/retry" => Self::Retry,
            "/quit" | "/exit" => Self::Quit,
            cmd if cmd.starts_with('/') => Self::Unknown(cmd),
            text => Self::Say(text),
        }
    }
}

pub async fn run(options: PlayOptions) -> Result<()> {
    let config = ConfigService::resolve(options.config.as_deref())?.load()?;

    let scenario = ScenarioCatalog::default()
        .get(&options.scenario_id)
        .cloned()
        .ok_or_else(|| {
            anyhow!(
                "unknown scenario '{}'; run `unisocial scenarios` to list them",
                options.scenario_id
            )
        })?;

    let service: Arc<dyn ConversationService> = match options.backend {
        Backend::Server => {
            let url = options
                .server_url
                .clone()
                .unwrap_or_else(|| server_url_for_bind(&config.server.bind));
            tracing::debug!(%url, "using server backend");
            Arc::new(RemoteConversationService::new(url, &config.timeouts))
        }
        Backend::Direct => {
            let secrets = SecretServiceImpl::from_config(&config);
            Arc::new(RolePlayService::from_config(&config, &secrets))
        }
        Backend::Offline => Arc::new(OfflineService::new()),
    };
    tracing::debug!(backend = ?options.backend, scenario_id = %scenario.id, "starting session");

    let mut session = SessionController::start(service, scenario);
    print_intro(session.scenario());
    print_character(session.transcript().messages()[0].text.as_str());

    let mut rl = Editor::new()?;
    rl.set_helper(Some(SessionHelper));

    loop {
        let line = match rl.readline(&format!("{} ", "你 >".green().bold())) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };

        match SessionInput::parse(&line) {
            SessionInput::Empty => continue,
            SessionInput::Quit => break,
            SessionInput::Unknown(cmd) => {
                println!("{}", format!("未知命令 {cmd}（可用：/end /retry /quit）").bright_black());
            }
            SessionInput::End => {
                println!("{}", "正在分析本次对话…".bright_black());
                let title = session.scenario().title.clone();
                let report = session.end_session().await;
                print_report(&title, &report.analysis);
                println!("{}", "输入 /retry 重新开始，或 /quit 返回。".bright_black());
            }
            SessionInput::Retry => {
                session.retry();
                println!("{}", "=== 重新开始 ===".bright_magenta());
                print_character(session.transcript().messages()[0].text.as_str());
            }
            SessionInput::Say(text) => {
                if session.is_ended() {
                    println!("{}", "本次对话已结束。输入 /retry 重新开始，或 /quit 返回。".yellow());
                    continue;
                }
                let _ = rl.add_history_entry(text);
                println!("{}", "对方正在输入…".bright_black());
                match session.send(text).await {
                    Ok(reply) => print_message(reply),
                    Err(err) => eprintln!("{}", err.to_string().red()),
                }
            }
        }
    }

    println!("{}", "再见！".bright_green());
    Ok(())
}

fn print_intro(scenario: &Scenario) {
    println!();
    println!(
        "{}",
        format!("=== {} {} ===", scenario.icon, scenario.title).bright_magenta().bold()
    );
    println!(
        "{}",
        format!(
            "{} · {}",
            scenario.category.label(),
            scenario.difficulty.label()
        )
        .cyan()
    );
    println!("{}", scenario.description);
    println!("{}", "命令：/end 结束并分析，/retry 重新开始，/quit 退出".bright_black());
    println!();
}

fn print_message(message: &Message) {
    print_character(&message.text);
}

fn print_character(text: &str) {
    for line in text.lines() {
        println!("{}", line.bright_blue());
    }
    println!();
}
