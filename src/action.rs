use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use convochat_whatsapp::{
    config::AppConfig,
    consts,
    services::{
        MessagingService,
        messaging::{OPERATIONS, WhatsAppService},
    },
    whatsapp::{
        SendResult,
        accounts::AccountResolver,
        client::{HttpTransport, ReqwestTransport},
        dispatcher::Dispatcher,
        request::RequestBuilder,
    },
};
use serde_json::{Value, json};
use std::sync::Arc;

#[derive(Args, Debug, Clone)]
pub struct SendTextArgs {
    #[arg(short, long)]
    recipient: String,
    #[arg(short, long)]
    message: String,
    /// 1 or 2, defaults to 2
    #[arg(short, long)]
    priority: Option<u8>,
}

#[derive(Args, Debug, Clone)]
pub struct SendMediaArgs {
    #[arg(short, long)]
    recipient: String,
    #[arg(long)]
    media_url: String,
    /// image, video or audio
    #[arg(long)]
    media_type: String,
    #[arg(short, long)]
    caption: Option<String>,
    #[arg(short, long)]
    priority: Option<u8>,
}

#[derive(Args, Debug, Clone)]
pub struct SendDocumentArgs {
    #[arg(short, long)]
    recipient: String,
    #[arg(long)]
    document_url: String,
    #[arg(long)]
    document_name: String,
    /// pdf, doc, docx, xls, xlsx or txt
    #[arg(long)]
    document_type: String,
    #[arg(short, long)]
    caption: Option<String>,
    #[arg(short, long)]
    priority: Option<u8>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Action {
    SendText(SendTextArgs),
    SendMedia(SendMediaArgs),
    SendDocument(SendDocumentArgs),
    /// Lists the WhatsApp accounts linked to CONVOCHAT_API_KEY
    ListAccounts,
    /// Lists the operations the service accepts
    Operations,
}

/// Sends WhatsApp messages through ConvoChat
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct AppArgs {
    #[command(subcommand)]
    pub action: Action,
}

impl AppArgs {
    pub async fn run(&self, app_config: &AppConfig) -> anyhow::Result<()> {
        let transport: Arc<dyn HttpTransport> =
            Arc::new(ReqwestTransport::new().context("failed to build http client")?);

        match &self.action {
            Action::ListAccounts => {
                let resolver = AccountResolver::new(transport, &app_config.convochat_api_base_url);
                let accounts = resolver
                    .list_accounts(&app_config.api_key()?)
                    .await
                    .map_err(|e| anyhow::anyhow!("{} ({})", e, e.code()))?;

                for account in accounts {
                    println!("{}\t{}", account.unique_id, account.label());
                }
                Ok(())
            }
            Action::Operations => {
                for operation in OPERATIONS {
                    println!("{operation}");
                }
                Ok(())
            }
            Action::SendText(args) => {
                let params = json!({
                    consts::ATTR_RECIPIENT: args.recipient,
                    consts::ATTR_MESSAGE: args.message,
                    consts::ATTR_PRIORITY: args.priority,
                });
                invoke(app_config, transport, consts::SERVICE_SEND_TEXT, params).await
            }
            Action::SendMedia(args) => {
                let params = json!({
                    consts::ATTR_RECIPIENT: args.recipient,
                    consts::ATTR_MEDIA_URL: args.media_url,
                    consts::ATTR_MEDIA_TYPE: args.media_type,
                    consts::ATTR_CAPTION: args.caption,
                    consts::ATTR_PRIORITY: args.priority,
                });
                invoke(app_config, transport, consts::SERVICE_SEND_MEDIA, params).await
            }
            Action::SendDocument(args) => {
                let params = json!({
                    consts::ATTR_RECIPIENT: args.recipient,
                    consts::ATTR_DOCUMENT_URL: args.document_url,
                    consts::ATTR_DOCUMENT_NAME: args.document_name,
                    consts::ATTR_DOCUMENT_TYPE: args.document_type,
                    consts::ATTR_CAPTION: args.caption,
                    consts::ATTR_PRIORITY: args.priority,
                });
                invoke(app_config, transport, consts::SERVICE_SEND_DOCUMENT, params).await
            }
        }
    }
}

fn build_service(
    app_config: &AppConfig,
    transport: Arc<dyn HttpTransport>,
) -> anyhow::Result<WhatsAppService> {
    Ok(WhatsAppService::new(
        app_config.connection_config()?,
        RequestBuilder::new(&app_config.convochat_api_base_url),
        Dispatcher::new(transport),
    ))
}

async fn invoke(
    app_config: &AppConfig,
    transport: Arc<dyn HttpTransport>,
    operation: &str,
    params: Value,
) -> anyhow::Result<()> {
    let service = build_service(app_config, transport)?;

    match service.invoke(operation, &params).await? {
        SendResult::Sent(payload) => {
            println!("{payload}");
            Ok(())
        }
        SendResult::Failed(e) => bail!("{operation} failed: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envconfig::Envconfig;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_operations_need_no_credentials() {
        let app_config = AppConfig::init_from_hashmap(&HashMap::new()).unwrap();
        assert!(app_config.connection_config().is_err());

        let args = AppArgs {
            action: Action::Operations,
        };

        assert!(args.run(&app_config).await.is_ok());
    }
}
