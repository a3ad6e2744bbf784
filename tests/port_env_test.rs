// PORT 是行程全域狀態，這個檔案只放一個測試避免互相干擾
use webkit_utils::{get_port, DEFAULT_LISTEN_ADDR};

#[test]
fn test_get_port_reads_environment() {
    std::env::remove_var("PORT");
    assert_eq!(get_port(), DEFAULT_LISTEN_ADDR);

    std::env::set_var("PORT", "8080");
    assert_eq!(get_port(), ":8080");

    std::env::set_var("PORT", "localhost:7878");
    assert_eq!(get_port(), "localhost:7878");

    std::env::remove_var("PORT");
}
