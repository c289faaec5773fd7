use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_cli::render::{help_text, render_board, status_message};
use tictactoe_cli::{Command, Session, Settings, Storage, TurnOutcome};
use tictactoe_core::Difficulty;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 人机对战井字棋
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "人机对战井字棋，人类执 X 先手", long_about = None)]
#[command(version)]
struct Cli {
    /// 电脑难度 (easy / hard / expert)，仅本次运行有效
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// 随机种子，指定后电脑落子可复现
    #[arg(long)]
    seed: Option<u64>,

    /// 数据目录，默认使用系统数据目录
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// 启动时清零胜负统计
    #[arg(long)]
    reset_scores: bool,

    /// 忽略上次保存的对局
    #[arg(long)]
    fresh: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = Settings::load();

    // 初始化日志，输出到 stderr 避免和棋盘混在一起
    let default_directive = format!("tictactoe={}", settings.log_level.as_filter());
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let storage = match &cli.data_dir {
        Some(dir) => Storage::with_dir(dir.clone())?,
        None => Storage::new()?,
    };
    info!("数据目录: {:?}", storage.data_directory());

    let mut scores = storage.load_scores();
    if cli.reset_scores {
        scores.reset();
        storage.save_scores(&scores)?;
    }

    let difficulty = cli.difficulty.unwrap_or(settings.difficulty);
    let mut session = Session::new(difficulty, cli.seed, scores);

    if cli.fresh {
        storage.clear_session()?;
    } else if resume(&mut session, &storage)? {
        if let Some(difficulty) = cli.difficulty {
            session.set_difficulty(difficulty);
        }
    }

    println!("井字棋：你执 X，电脑执 O，难度 {}", session.difficulty());
    println!("输入 h 查看命令");
    print_board(&session);

    let chosen = run(&mut session, &storage)?;

    if !session.is_over() && session.game().move_count() > 0 {
        storage.save_session(&session.to_saved())?;
        println!("未完成的对局已保存，下次启动时继续");
    } else {
        storage.clear_session()?;
    }
    storage.save_scores(session.scores())?;

    if let Some(difficulty) = chosen {
        if difficulty != settings.difficulty {
            settings.difficulty = difficulty;
            if let Err(e) = settings.save() {
                warn!("保存设置失败: {:#}", e);
            }
        }
    }

    println!("{}", session.scores());
    Ok(())
}

/// 恢复上次保存的对局，返回是否恢复成功
fn resume(session: &mut Session, storage: &Storage) -> Result<bool> {
    let saved = match storage.load_session() {
        Ok(Some(saved)) => saved,
        Ok(None) => return Ok(false),
        Err(e) => {
            warn!("保存的对局无法读取，已丢弃: {:#}", e);
            storage.clear_session()?;
            return Ok(false);
        }
    };

    if let Err(e) = session.restore(&saved) {
        warn!("保存的对局无效，已丢弃: {}", e);
        storage.clear_session()?;
        return Ok(false);
    }

    println!(
        "已恢复 {} 保存的对局",
        saved.saved_at.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M")
    );
    if session.is_over() {
        storage.save_scores(session.scores())?;
    }
    Ok(true)
}

/// 交互主循环，返回用户通过命令选定的难度
fn run(session: &mut Session, storage: &Storage) -> Result<Option<Difficulty>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut chosen = None;

    loop {
        print!("> ");
        io::stdout().flush().context("刷新输出失败")?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line.context("读取输入失败")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(msg) => {
                println!("{}", msg);
                continue;
            }
        };

        match command {
            Command::Play(index) => {
                if session.is_over() {
                    println!("本局已结束，输入 n 开始新对局");
                    continue;
                }
                match session.play(index) {
                    Ok(outcome) => {
                        report_turn(&outcome);
                        print_board(session);
                        if outcome.status.is_over() {
                            storage.save_scores(session.scores())?;
                            println!("{}", session.scores());
                            println!("输入 n 开始新对局");
                        }
                    }
                    Err(e) => println!("无法落子: {}", e),
                }
            }
            Command::NewGame => {
                session.new_game();
                print_board(session);
            }
            Command::Difficulty(difficulty) => {
                session.change_difficulty(difficulty);
                chosen = Some(difficulty);
                println!("难度已切换为 {}，新对局开始", difficulty.display_name());
                print_board(session);
            }
            Command::Score => println!("{}", session.scores()),
            Command::ResetScore => {
                session.reset_scores();
                storage.save_scores(session.scores())?;
                println!("统计已清零");
            }
            Command::Help => println!("{}", help_text()),
            Command::Quit => break,
        }
    }

    Ok(chosen)
}

fn report_turn(outcome: &TurnOutcome) {
    println!("你下在 {}", outcome.human + 1);
    if let Some(selection) = outcome.computer {
        println!("电脑下在 {}", selection.position.index() + 1);
    }
}

fn print_board(session: &Session) {
    println!();
    println!("{}", render_board(session.game().board()));
    println!();
    println!("{}", status_message(session.status()));
}
