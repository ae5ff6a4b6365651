//! 邮件客户端实现

use std::path::Path;

use async_trait::async_trait;
use lettre::message::header::{ContentTransferEncoding, ContentType};
use lettre::message::{Attachment, Body, Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;
use splash_config::MailConfig;
use splash_errors::{ReportError, ReportResult};
use splash_ports::ReportMailer;
use tracing::{debug, info};

/// 报表邮件主题
pub const REPORT_SUBJECT: &str = "Arquivo de login Splash";

const ATTACHMENT_CONTENT_TYPE: &str = "application/octet-stream";

/// 邮件客户端
pub struct EmailClient {
    config: MailConfig,
}

impl EmailClient {
    /// 创建新的邮件客户端
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }

    /// 构建 SMTP 传输
    ///
    /// 先以明文连接，再通过 STARTTLS 升级，升级成功后才发送凭据。
    fn build_transport(&self) -> ReportResult<AsyncSmtpTransport<Tokio1Executor>> {
        let credentials = Credentials::new(
            self.config.sender_email.clone(),
            self.config.sender_password.expose_secret().clone(),
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_server)
            .map_err(|e| ReportError::mail(format!("Failed to create SMTP transport: {}", e)))?
            .port(self.config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(transport)
    }

    /// 构建带单个附件的邮件消息
    pub fn build_message(&self, file_name: &str, content: Vec<u8>) -> ReportResult<Message> {
        let from: Mailbox = self
            .config
            .sender_email
            .parse()
            .map_err(|e| ReportError::mail(format!("Invalid sender address: {}", e)))?;

        let to: Mailbox = self
            .config
            .recipient_email
            .parse()
            .map_err(|e| ReportError::mail(format!("Invalid recipient address: {}", e)))?;

        let content_type = ContentType::parse(ATTACHMENT_CONTENT_TYPE)
            .map_err(|e| ReportError::mail(format!("Invalid attachment content type: {}", e)))?;

        let body = Body::new_with_encoding(content, ContentTransferEncoding::Base64)
            .map_err(|_| ReportError::mail("Failed to encode attachment"))?;

        let attachment = Attachment::new(file_name.to_string()).body(body, content_type);

        Message::builder()
            .from(from)
            .to(to)
            .subject(REPORT_SUBJECT)
            .multipart(MultiPart::mixed().singlepart(attachment))
            .map_err(|e| ReportError::mail(format!("Failed to build message: {}", e)))
    }

    /// 读取文件并作为附件发送
    pub async fn send_attachment(&self, path: &Path) -> ReportResult<()> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ReportError::mail(format!("Attachment path has no file name: {}", path.display()))
            })?;

        let content = tokio::fs::read(path).await?;
        debug!(file = %file_name, bytes = content.len(), "Attaching report");

        let message = self.build_message(&file_name, content)?;
        let transport = self.build_transport()?;

        transport
            .send(message)
            .await
            .map_err(|e| ReportError::mail(format!("Failed to send email: {}", e)))?;

        info!(to = %self.config.recipient_email, file = %file_name, "Email sent");
        Ok(())
    }
}

#[async_trait]
impl ReportMailer for EmailClient {
    async fn send_report(&self, path: &Path) -> ReportResult<()> {
        self.send_attachment(path).await
    }
}
