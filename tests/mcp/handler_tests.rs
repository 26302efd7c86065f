//! MCP handler tests
//!
//! Drives `process_message` with raw JSON-RPC lines, the same way the
//! stdio server does.

#[cfg(test)]
mod tests {
    use crate::common::{create_test_engine_with_provider, sample_project, MockProvider, TestRepo};
    use coderag::mcp::handlers::ProtocolHandlers;
    use coderag::mcp::process_message;
    use coderag::mcp::protocol::*;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn create_test_handlers(repo: &TestRepo) -> ProtocolHandlers {
        let engine = create_test_engine_with_provider(
            repo.path(),
            Arc::new(MockProvider::new(vec!["The answer."])),
        );
        ProtocolHandlers::new(engine)
    }

    async fn send(handlers: &ProtocolHandlers, request: Value) -> JsonRpcResponse {
        process_message(handlers, &request.to_string()).await.unwrap()
    }

    /// Call a tool and decode the JSON carried in its text content
    async fn call_tool(handlers: &ProtocolHandlers, name: &str, arguments: Value) -> (Value, bool) {
        let response = send(
            handlers,
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "tools/call",
                "params": {"name": name, "arguments": arguments}
            }),
        )
        .await;

        assert!(response.error.is_none(), "tool {name} failed: {:?}", response.error);
        let result = response.result.unwrap();
        let text = result["content"][0]["text"].as_str().unwrap();
        let is_error = result.get("isError").and_then(Value::as_bool).unwrap_or(false);
        (serde_json::from_str(text).unwrap(), is_error)
    }

    #[tokio::test]
    async fn test_initialize_handler() {
        let repo = sample_project();
        let handlers = create_test_handlers(&repo);

        let response = send(
            &handlers,
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "initialize",
                "params": {
                    "protocolVersion": "2024-11-05",
                    "capabilities": {"tools": {}},
                    "clientInfo": {"name": "test", "version": "1.0"}
                }
            }),
        )
        .await;

        assert!(response.error.is_none());
        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert_eq!(result["serverInfo"]["name"], "coderag-mcp");
        assert_eq!(result["capabilities"]["tools"]["listChanged"], false);
    }

    #[tokio::test]
    async fn test_initialized_notification_marks_ready() {
        let repo = sample_project();
        let handlers = create_test_handlers(&repo);
        assert!(!handlers.is_initialized());

        let response = send(
            &handlers,
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
        )
        .await;

        assert!(handlers.is_initialized());
        assert!(response.id.is_none());
        assert!(response.result.is_none());
        assert!(response.error.is_none());
    }

    #[tokio::test]
    async fn test_tools_list_exposes_rag_tools() {
        let repo = sample_project();
        let handlers = create_test_handlers(&repo);

        let response = send(
            &handlers,
            json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
        )
        .await;

        let tools = response.result.unwrap()["tools"].as_array().unwrap().clone();
        let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
        assert_eq!(
            names,
            vec!["rag_clear", "rag_index_directory", "rag_query", "rag_search", "rag_status"]
        );
        for tool in &tools {
            assert_eq!(tool["inputSchema"]["type"], "object");
        }
    }

    #[tokio::test]
    async fn test_index_search_query_status_clear_flow() {
        let repo = sample_project();
        let handlers = create_test_handlers(&repo);

        let (indexed, is_error) =
            call_tool(&handlers, "rag_index_directory", json!({"directory": "."})).await;
        assert!(!is_error);
        assert_eq!(indexed["success"], true);
        assert_eq!(indexed["indexed"], 4);
        assert_eq!(indexed["totalDocuments"], 4);
        assert!(indexed["durationMs"].is_u64());

        let (search, _) = call_tool(&handlers, "rag_search", json!({"query": "authenticate"})).await;
        assert_eq!(search["success"], true);
        assert_eq!(search["count"], 1);
        assert_eq!(search["results"][0]["path"], "src/auth.js");

        let (query, is_error) = call_tool(
            &handlers,
            "rag_query",
            json!({"query": "authenticate password", "model": "test-model"}),
        )
        .await;
        assert!(!is_error);
        assert_eq!(query["success"], true);
        assert_eq!(query["response"], "The answer.");
        assert_eq!(query["model"], "test-model");
        assert_eq!(query["totalIndexed"], 4);
        assert_eq!(query["sourcesUsed"][0]["path"], "src/auth.js");
        assert_eq!(query["sourcesUsed"][0]["relevance"], "100%");

        let (status, _) = call_tool(&handlers, "rag_status", json!({})).await;
        assert_eq!(status["indexed"], true);
        assert_eq!(status["documents"], 4);
        assert!(status["lastUpdated"].is_string());

        let (cleared, _) = call_tool(&handlers, "rag_clear", Value::Null).await;
        assert_eq!(cleared["success"], true);
        assert_eq!(cleared["message"], "RAG index cleared");

        let (status, _) = call_tool(&handlers, "rag_status", json!({})).await;
        assert_eq!(status["indexed"], false);
        assert_eq!(status["documents"], 0);
    }

    #[tokio::test]
    async fn test_tool_failures_are_reported_in_result() {
        let repo = sample_project();
        let handlers = create_test_handlers(&repo);

        let (query, is_error) =
            call_tool(&handlers, "rag_query", json!({"query": "authenticate"})).await;
        assert!(is_error);
        assert_eq!(query["success"], false);
        assert!(query["error"].as_str().unwrap().contains("No documents indexed"));

        let (index, is_error) =
            call_tool(&handlers, "rag_index_directory", json!({"directory": "../.."})).await;
        assert!(is_error);
        assert_eq!(index["success"], false);
        assert!(index["error"].as_str().unwrap().contains("Access denied"));
    }

    #[tokio::test]
    async fn test_invalid_tool_arguments() {
        let repo = sample_project();
        let handlers = create_test_handlers(&repo);

        let response = send(
            &handlers,
            json!({
                "jsonrpc": "2.0",
                "id": 3,
                "method": "tools/call",
                "params": {"name": "rag_search", "arguments": {"topK": 2}}
            }),
        )
        .await;

        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let repo = sample_project();
        let handlers = create_test_handlers(&repo);

        let response = send(
            &handlers,
            json!({
                "jsonrpc": "2.0",
                "id": 4,
                "method": "tools/call",
                "params": {"name": "rag_delete_everything", "arguments": {}}
            }),
        )
        .await;

        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_REQUEST);
        assert!(error.message.contains("rag_delete_everything"));
    }

    #[tokio::test]
    async fn test_unknown_method_and_bad_version() {
        let repo = sample_project();
        let handlers = create_test_handlers(&repo);

        let response = send(
            &handlers,
            json!({"jsonrpc": "2.0", "id": 5, "method": "resources/list"}),
        )
        .await;
        assert_eq!(response.error.unwrap().code, METHOD_NOT_FOUND);
        assert_eq!(response.id, Some(json!(5)));

        let response = send(
            &handlers,
            json!({"jsonrpc": "1.0", "id": 6, "method": "ping"}),
        )
        .await;
        assert_eq!(response.error.unwrap().code, INVALID_REQUEST);
    }

    #[tokio::test]
    async fn test_ping() {
        let repo = sample_project();
        let handlers = create_test_handlers(&repo);

        let response = send(&handlers, json!({"jsonrpc": "2.0", "id": 7, "method": "ping"})).await;
        assert_eq!(response.result, Some(json!({})));
    }

    #[tokio::test]
    async fn test_malformed_json_is_parse_error() {
        let repo = sample_project();
        let handlers = create_test_handlers(&repo);

        let err = process_message(&handlers, "{not json").await.unwrap_err();
        let (code, _) = err.to_code_and_message();
        assert_eq!(code, PARSE_ERROR);
    }
}
