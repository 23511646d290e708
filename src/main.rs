use runlines::{Conf, FountainParser, FountainWriter, ScriptError};
use std::fs;
use std::env;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: {} <fountain_file> [config.json]", args[0]);
        return;
    }

    let file_path = &args[1];

    let config = match args.get(2) {
        Some(conf_path) => match fs::read_to_string(conf_path).map_err(ScriptError::from).and_then(|s| Conf::from_json(&s)) {
            Ok(conf) => conf,
            Err(e) => {
                println!("读取配置失败: {}", e);
                return;
            }
        },
        None => Conf::default(),
    };

    match fs::read_to_string(file_path) {
        Ok(content) => {
            let result = FountainParser::new(config.clone()).parse_output(&content);

            println!("解析完成！");
            println!("解析时间: {}ms", result.parse_time);
            println!("块数量: {}", result.block_count);
            println!("Token数量: {}", result.tokens.len());
            println!("场景数量: {}", result.script.scenes().len());
            println!("角色数量: {}", result.script.actors().len());
            println!("台词数量: {}", result.script.line_count());

            let json_path = format!("{}.json", file_path);
            match result.script.to_json() {
                Ok(json) => match fs::write(&json_path, json) {
                    Ok(_) => println!("JSON输出已保存到: {}", json_path),
                    Err(e) => println!("写入JSON失败: {}", e),
                },
                Err(e) => println!("序列化失败: {}", e),
            }

            let fountain_path = format!("{}.out.fountain", file_path);
            let text = FountainWriter::new(&config).write(&result.script);
            match fs::write(&fountain_path, text) {
                Ok(_) => println!("Fountain输出已保存到: {}", fountain_path),
                Err(e) => println!("写入Fountain失败: {}", e),
            }
        },
        Err(e) => {
            println!("读取文件失败: {}", e);
        }
    }
}
