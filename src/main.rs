use anyhow::{Context, Result};
use clap::Parser;
use qa_merge::utils::logging;
use qa_merge::{App, Cli, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_cli(Cli::parse());

    // 运行合并流程
    App::new(config).run().await.context("问答数据合并失败")?;

    Ok(())
}
