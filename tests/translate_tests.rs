// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for dictionary translation of comments and literals

use anglicize::translate::{translate, TranslationTable, Translator};
use anglicize::RewriteError;
use std::fs;
use tempfile::TempDir;

const PROCESSOR_SOURCE: &str = r#"/**
 * 访问请求处理器
 * 核心访问控制逻辑
 *必须在内存中高效处理请求
 */
public class AccessRequestProcessor {
    // 内存中的快速查找结构
    private Map<String, String> cache; // 用户ID -> 配置文件名称集合

    // 处理访问请求
    public String process() {
        // 访问请求
        if (denied) return "访问被拒绝";
        char c = '退出';
        String s = "访问被拒绝了";
        // 配置文件不存在
        return "配置文件";
    }
}
"#;

const PROCESSOR_EXPECTED: &str = r#"/**
 * Access Request Processor
 * Core access control logic
 * Must process requests efficiently in memory
 */
public class AccessRequestProcessor {
    // In-memory fast lookup structures
    private Map<String, String> cache; // User ID -> Profile name set

    // Process access request
    public String process() {
        // Access request
        if (denied) return "Access denied";
        char c = 'Exit';
        String s = "访问被拒绝了";
        // Profile不存在
        return "Profile";
    }
}
"#;

fn write_java(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_javadoc_scenario() {
    let dir = TempDir::new().unwrap();
    let path = write_java(
        &dir,
        "DatabaseManager.java",
        "/** 数据库管理器 */\npublic class DatabaseManager {}\n",
    );

    assert!(translate(&path).unwrap());
    let body = fs::read_to_string(&path).unwrap();
    assert!(body.starts_with("/** Database Manager */\n"));
}

#[test]
fn test_line_comment_scenario() {
    let dir = TempDir::new().unwrap();
    let path = write_java(&dir, "Check.java", "// 用户没有配置访问权限\n");

    assert!(translate(&path).unwrap());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "// User has no access permissions configured\n"
    );
}

#[test]
fn test_no_phrases_means_no_write() {
    let dir = TempDir::new().unwrap();
    let body = "public class Plain {\n    // already English\n    String s = \"数据\";\n}\n";
    let path = write_java(&dir, "Plain.java", body);

    assert!(!translate(&path).unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), body);
}

#[test]
fn test_partial_literal_is_left_alone() {
    let translator = Translator::default();
    let source = "x = \"foo 数据库管理器 bar\";\n// 数据库管理器\n";
    let out = translator.apply(source);
    assert_eq!(
        out.content,
        "x = \"foo 数据库管理器 bar\";\n// Database Manager\n"
    );
}

#[test]
fn test_table_order_is_pinned() {
    let out = Translator::default().apply(PROCESSOR_SOURCE);
    assert_eq!(out.content, PROCESSOR_EXPECTED);
    assert_eq!(out.replacements, 11);
}

#[test]
fn test_translate_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = write_java(&dir, "AccessRequestProcessor.java", PROCESSOR_SOURCE);

    assert!(translate(&path).unwrap());
    let first = fs::read_to_string(&path).unwrap();
    assert!(!translate(&path).unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), first);
}

#[test]
fn test_custom_table_order_decides_overlap() {
    let long_first: TranslationTable = [("访问请求处理器", "Processor"), ("访问请求", "Request")]
        .into_iter()
        .collect();
    let short_first: TranslationTable = [("访问请求", "Request"), ("访问请求处理器", "Processor")]
        .into_iter()
        .collect();

    let input = "// 访问请求处理器\n";
    assert_eq!(Translator::new(long_first).apply(input).content, "// Processor\n");
    assert_eq!(Translator::new(short_first).apply(input).content, "// Request处理器\n");
}

#[test]
fn test_non_utf8_file_is_decode_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Legacy.java");
    fs::write(&path, [0x2f, 0x2f, 0x20, 0xd3, 0xc3, 0xbb, 0xa7]).unwrap();

    let err = translate(&path).unwrap_err();
    assert!(matches!(err, RewriteError::Decode { .. }));
}
