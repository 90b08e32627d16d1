pub async fn copy_text(_text: &str) -> Result<(), String> {
    Err(super::super::unsupported())
}
