/// The built-in demo site list: display title and URL.
pub const SITES: &[(&str, &str)] = &[
    ("Apple", "https://www.apple.com/cn/"),
    ("WebBrowser - Github", "https://github.com/teambition/WebBrowser"),
    ("Teambition", "https://www.teambition.com"),
    ("新浪网", "http://www.sina.com.cn"),
    ("腾讯网", "http://www.qq.com"),
    ("网易", "http://www.163.com"),
    ("必应地图", "http://cn.bing.com/ditu/"),
    ("优酷", "http://www.youku.com"),
    ("Google", "http://www.google.com"),
    ("Facebook", "https://www.facebook.com/"),
];
