//! Test notification integration tests
//!
//! The interactive path returns every failure to its caller.

#[cfg(test)]
mod tests {
    use crate::common::{MockReceiver, WebhookBodyAssertions};
    use audit_webhook::{
        CallContext, NotifierError, WebhookNotifier, WebhookSettings, cancel_pair,
    };
    use std::time::Duration;

    fn notifier(url: impl Into<String>) -> WebhookNotifier {
        WebhookNotifier::new(reqwest::Client::new(), WebhookSettings::new(url))
            .with_source_name("Example IdP")
    }

    #[tokio::test]
    async fn test_success_for_every_2xx() {
        for status in [200, 201, 202, 204, 299] {
            let receiver = MockReceiver::responding(status).await;
            let result = notifier(receiver.url())
                .send_test_notification(&CallContext::background())
                .await;
            assert!(result.is_ok(), "status {} should succeed: {:?}", status, result);
        }
    }

    #[tokio::test]
    async fn test_body_contents() {
        let receiver = MockReceiver::responding(200).await;
        notifier(receiver.url())
            .send_test_notification(&CallContext::background())
            .await
            .unwrap();

        let bodies = receiver.bodies().await;
        let embed = bodies[0].assert_shape("embeds");
        assert_eq!(embed["title"], "Test Webhook");
        assert_eq!(embed["fields"][0]["name"], "Status");
        assert_eq!(embed["fields"][0]["value"], "Connection successful");
        assert_eq!(embed["fields"][0]["inline"], false);
        assert_eq!(embed["fields"][1]["name"], "Source");
        assert_eq!(embed["fields"][1]["value"], "Example IdP");
        assert_eq!(embed["fields"][1]["inline"], true);
        assert!(embed["timestamp"].as_str().is_some_and(|ts| ts.ends_with('Z')));
    }

    #[tokio::test]
    async fn test_not_configured_makes_no_request() {
        let receiver = MockReceiver::responding(200).await;
        let err = notifier("")
            .send_test_notification(&CallContext::background())
            .await
            .unwrap_err();

        assert!(matches!(err, NotifierError::NotConfigured));
        assert_eq!(receiver.request_count().await, 0);
    }

    #[tokio::test]
    async fn test_server_error_reports_status() {
        let receiver = MockReceiver::responding(500).await;
        let err = notifier(receiver.url())
            .send_test_notification(&CallContext::background())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), Some(500));
        assert!(err.to_string().contains("500"));
        assert!(!err.is_not_configured());
    }

    #[tokio::test]
    async fn test_redirect_status_is_failure() {
        let receiver = MockReceiver::responding(304).await;
        let err = notifier(receiver.url())
            .send_test_notification(&CallContext::background())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), Some(304));
    }

    #[tokio::test]
    async fn test_invalid_url_is_request_error() {
        let err = notifier("not a url")
            .send_test_notification(&CallContext::background())
            .await
            .unwrap_err();

        assert!(matches!(err, NotifierError::Request(_)), "{:?}", err);
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let err = notifier("http://127.0.0.1:9/hook")
            .send_test_notification(&CallContext::background())
            .await
            .unwrap_err();

        assert!(matches!(err, NotifierError::Transport(_)), "{:?}", err);
    }

    #[tokio::test]
    async fn test_cancellation_aborts_in_flight_request() {
        let receiver = MockReceiver::slow(Duration::from_secs(10)).await;
        let (handle, signal) = cancel_pair();
        let ctx = CallContext::background().with_cancel(signal);

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            handle.cancel();
        });

        let started = std::time::Instant::now();
        let err = notifier(receiver.url())
            .send_test_notification(&ctx)
            .await
            .unwrap_err();

        assert!(matches!(err, NotifierError::Cancelled));
        assert!(err.is_transport());
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
