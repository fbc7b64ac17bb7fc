use clap::Parser;
use site_provisioner::adapters::aws_adapters;
use site_provisioner::domain::ports::OperatorPrompt;
use site_provisioner::utils::logger::{self, LogFormat};
use site_provisioner::{
    AutoConfirm, CliConfig, ConsolePrompt, ProvisionError, ProvisionReport, ProvisioningWorkflow,
    StackTemplate, WorkflowStage,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(cli.verbose, format);

    match run(&cli).await {
        Ok(report) => {
            if let Err(e) = print_report(&report, cli.json) {
                fail(e);
            }
            tracing::debug!("Stage -> {}", WorkflowStage::OutputPrinted);
            tracing::info!("✅ Provisioning completed successfully!");
        }
        Err(e) => fail(e),
    }
}

async fn run(cli: &CliConfig) -> Result<ProvisionReport, ProvisionError> {
    // 驗證配置
    let config = cli.resolve()?;
    tracing::debug!("Resolved config: {:?}", config);

    tracing::info!("📁 Loading stack template from {}", config.template_path.display());
    let template = StackTemplate::new(std::fs::read_to_string(&config.template_path)?);

    let (certificates, storage, stacks) = aws_adapters(&config).await;
    let prompt: Box<dyn OperatorPrompt> = if cli.yes {
        Box::new(AutoConfirm)
    } else {
        Box::new(ConsolePrompt::stdio())
    };

    let workflow = ProvisioningWorkflow::new(certificates, storage, stacks, prompt, config);
    workflow.run(&template).await
}

fn print_report(report: &ProvisionReport, as_json: bool) -> Result<(), ProvisionError> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report.distribution_domain_name);
    }
    Ok(())
}

fn fail(e: ProvisionError) -> ! {
    // 記錄詳細錯誤信息
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
