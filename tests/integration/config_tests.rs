//! Configuration integration tests

#[cfg(test)]
mod tests {
    use crate::common::{AuditEventFactory, MockReceiver, WebhookBodyAssertions};
    use audit_webhook::{CallContext, Config, NotifyOutcome, SharedSettings, WebhookNotifier};
    use std::io::Write;
    use tempfile::NamedTempFile;

    async fn config_file(yaml: &str) -> Config {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        Config::from_file(file.path()).await.unwrap()
    }

    #[tokio::test]
    async fn test_notifier_from_config_file() {
        let receiver = MockReceiver::responding(200).await;
        let config = config_file(&format!(
            "webhook:\n  url: \"{}\"\n  events: \"SIGN_IN\"\n  style: attachments\nsource_name: \"Example IdP\"\n",
            receiver.url()
        ))
        .await;

        let notifier =
            WebhookNotifier::from_config(&config, SharedSettings::new(config.webhook.clone()))
                .unwrap();
        assert_eq!(notifier.source_name(), "Example IdP");

        let outcome = notifier
            .notify_event(&AuditEventFactory::sign_in(), &CallContext::background())
            .await;
        assert_eq!(outcome, NotifyOutcome::Delivered);

        let bodies = receiver.bodies().await;
        bodies[0].assert_shape("attachments");
    }

    #[tokio::test]
    async fn test_empty_config_disables_delivery() {
        let config = config_file("{}\n").await;
        let notifier =
            WebhookNotifier::from_config(&config, config.webhook.clone()).unwrap();

        let outcome = notifier
            .notify_event(&AuditEventFactory::sign_in(), &CallContext::background())
            .await;
        assert_eq!(outcome, NotifyOutcome::Disabled);
        assert!(
            notifier
                .send_test_notification(&CallContext::background())
                .await
                .unwrap_err()
                .is_not_configured()
        );
    }

    #[tokio::test]
    async fn test_configured_timeout_applies_to_client() {
        let receiver = MockReceiver::slow(std::time::Duration::from_secs(3)).await;
        let config = config_file(&format!(
            "webhook:\n  url: \"{}\"\nhttp:\n  timeout_seconds: 1\n",
            receiver.url()
        ))
        .await;

        let notifier = WebhookNotifier::from_config(&config, config.webhook.clone()).unwrap();
        let err = notifier
            .send_test_notification(&CallContext::background())
            .await
            .unwrap_err();

        assert!(err.is_transport(), "{:?}", err);
    }
}
