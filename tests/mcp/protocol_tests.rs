//! MCP protocol unit tests

#[cfg(test)]
mod tests {
    use coderag::mcp::handlers::{error_response, success_response};
    use coderag::mcp::protocol::*;
    use serde_json::json;

    #[test]
    fn test_parse_initialize_request() {
        let json = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "protocolVersion": "2024-11-05",
                "capabilities": {"tools": {}},
                "clientInfo": {
                    "name": "test",
                    "version": "1.0"
                }
            }
        }"#;

        let req: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.id, Some(json!(1)));

        let params: InitializeParams = serde_json::from_value(req.params.unwrap()).unwrap();
        assert_eq!(params.client_info.unwrap().name, "test");
    }

    #[test]
    fn test_parse_tools_call_request() {
        let json = r#"{
            "jsonrpc": "2.0",
            "id": "call-7",
            "method": "tools/call",
            "params": {
                "name": "rag_search",
                "arguments": {"query": "parse config", "topK": 3}
            }
        }"#;

        let req: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.method, "tools/call");
        assert_eq!(req.id, Some(json!("call-7")));

        let params: ToolCallParams = serde_json::from_value(req.params.unwrap()).unwrap();
        assert_eq!(params.name, "rag_search");
        assert_eq!(params.arguments["topK"], 3);
    }

    #[test]
    fn test_notification_has_no_id() {
        let json = r#"{"jsonrpc": "2.0", "method": "notifications/initialized"}"#;

        let req: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert!(req.id.is_none());
        assert!(req.params.is_none());
    }

    #[test]
    fn test_serialize_initialize_response() {
        let response = InitializeResult {
            protocol_version: "2024-11-05".to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: "coderag-mcp".to_string(),
                version: "0.1.0".to_string(),
            },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["protocolVersion"], "2024-11-05");
        assert_eq!(json["serverInfo"]["name"], "coderag-mcp");
        assert_eq!(json["capabilities"]["tools"]["listChanged"], false);
    }

    #[test]
    fn test_result_and_error_are_exclusive_on_the_wire() {
        let ok = serde_json::to_value(success_response(Some(json!(4)), json!({"status": "ok"})))
            .unwrap();
        assert_eq!(ok, json!({"jsonrpc": "2.0", "id": 4, "result": {"status": "ok"}}));

        let failed = serde_json::to_value(error_response(
            Some(json!("x")),
            METHOD_NOT_FOUND,
            "Unknown method: tools/run".to_string(),
        ))
        .unwrap();
        assert_eq!(failed["error"]["code"], -32601);
        assert!(failed.get("result").is_none());
        assert!(failed["error"].get("data").is_none());
    }

    #[test]
    fn test_tool_result_error_flag() {
        let result = ToolResult {
            content: vec![ContentBlock::Text {
                text: "{\"success\": false}".to_string(),
            }],
            is_error: Some(true),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["isError"], true);
        assert_eq!(json["content"][0]["type"], "text");
    }

    #[test]
    fn test_tool_schema_uses_input_schema_key() {
        let schema = ToolSchema {
            name: "rag_status".to_string(),
            description: "Show indexed documents".to_string(),
            input_schema: json!({"type": "object", "properties": {}}),
        };

        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["inputSchema"]["type"], "object");
        assert!(json.get("input_schema").is_none());
    }
}
