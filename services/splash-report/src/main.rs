//! Splash Login Report - 任务入口
//!
//! 由 crontab 或 Windows 任务计划程序定时触发，每次运行一次后退出

use std::process::ExitCode;

use chrono::Local;
use splash_adapter_email::EmailClient;
use splash_adapter_meraki::MerakiClient;
use splash_adapter_spreadsheet::XlsxReportWriter;
use splash_bootstrap::run;
use splash_report::{PipelineSettings, run_pipeline};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    run("config", |config| async move {
        // 组装适配器
        let source = MerakiClient::new(&config.meraki)?;
        let writer = XlsxReportWriter::new();
        let mailer = EmailClient::new(config.mail.clone());

        let settings = PipelineSettings::from(&config);
        run_pipeline(&settings, &source, &writer, &mailer, Local::now().naive_local()).await
    })
    .await
}
